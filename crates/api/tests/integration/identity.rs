use api::auth::identity::CALLER_ID_HEADER;
use api::auth::CallerIdentity;
use axum::http::{HeaderMap, HeaderValue};
use uuid::Uuid;

#[test]
fn test_identity_absent_header() {
    let headers = HeaderMap::new();
    assert_eq!(CallerIdentity::from_headers(&headers), Ok(None));
}

#[test]
fn test_identity_valid_header() {
    let user_id = Uuid::new_v4();
    let mut headers = HeaderMap::new();
    headers.insert(
        CALLER_ID_HEADER,
        HeaderValue::from_str(&user_id.to_string()).unwrap(),
    );

    assert_eq!(
        CallerIdentity::from_headers(&headers),
        Ok(Some(CallerIdentity::new(user_id)))
    );
}

#[test]
fn test_identity_malformed_header() {
    let mut headers = HeaderMap::new();
    headers.insert(CALLER_ID_HEADER, HeaderValue::from_static("63e10ae80513291dc127e29b"));

    assert!(CallerIdentity::from_headers(&headers).is_err());
}
