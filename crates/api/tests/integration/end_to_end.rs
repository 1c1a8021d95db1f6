use api::auth::CallerIdentity;
use api::gql::build_schema;
use async_graphql::Variables;
use serde_json::json;
use uuid::Uuid;

use crate::common::*;

#[tokio::test]
async fn test_register_then_create_and_list_event() {
    let (state, _store) = setup_memory_state();
    let schema = build_schema(state);

    let variables = Variables::from_json(json!({
        "input": { "username": "a", "email": "a@x.com", "password": "secret" }
    }));
    let response = execute_graphql(&schema, CREATE_USER, Some(variables), None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert!(data["createUser"]["password"].is_null());
    let user_id = Uuid::parse_str(data["createUser"]["_id"].as_str().unwrap()).unwrap();

    let variables = Variables::from_json(json!({
        "input": { "title": "T", "description": "D", "price": 10, "date": "2024-01-01" }
    }));
    let response = execute_graphql(
        &schema,
        CREATE_EVENT,
        Some(variables),
        Some(CallerIdentity::new(user_id)),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let response =
        execute_graphql(&schema, "{ events { _id title price date } }", None, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let events = data["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "T");
    assert_eq!(events[0]["price"].as_f64(), Some(10.0));
    assert_eq!(events[0]["date"], "2024-01-01");
}
