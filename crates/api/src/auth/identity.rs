use axum::http::HeaderMap;
use uuid::Uuid;

/// Header an upstream authenticator uses to tell us who is calling.
pub const CALLER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller, as asserted by whatever sits in front of this service.
/// Authentication itself happens elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: Uuid,
}

impl CallerIdentity {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    /// `Ok(None)` when the header is absent, `Err` when it is present but not a UUID.
    pub fn from_headers(headers: &HeaderMap) -> Result<Option<Self>, String> {
        let Some(value) = headers.get(CALLER_ID_HEADER) else {
            return Ok(None);
        };

        let raw = value
            .to_str()
            .map_err(|_| format!("{CALLER_ID_HEADER} header is not valid ASCII"))?;
        let user_id = Uuid::parse_str(raw.trim())
            .map_err(|e| format!("{CALLER_ID_HEADER} header is not a valid UUID: {e}"))?;

        Ok(Some(Self { user_id }))
    }
}
