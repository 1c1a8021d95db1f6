use std::sync::Arc;

use api::auth::CallerIdentity;
use api::gql::AppSchema;
use api::{AppConfig, AppState};
use async_graphql::{Request, Variables};
use async_trait::async_trait;
use infra::models::{EventRow, NewEvent, NewUser, UserRow};
use infra::{EntityStore, InMemoryStore, StoreError, StoreResult};
use serde_json::json;
use uuid::Uuid;

/// Lowest cost bcrypt accepts; keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_config() -> AppConfig {
    AppConfig {
        bcrypt_cost: TEST_BCRYPT_COST,
        ..AppConfig::default()
    }
}

/// App state over a fresh in-memory store. The store handle is returned so
/// tests can inspect what was persisted.
pub fn setup_memory_state() -> (AppState, Arc<InMemoryStore>) {
    setup_memory_state_with(test_config())
}

pub fn setup_memory_state_with(config: AppConfig) -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone(), config);
    (state, store)
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
    caller: Option<CallerIdentity>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    if let Some(caller) = caller {
        request = request.data(caller);
    }

    schema.execute(request).await
}

#[allow(dead_code)]
pub const CREATE_USER: &str = r#"
    mutation CreateUser($input: UserInput!) {
        createUser(userInput: $input) {
            _id
            username
            email
            password
            createdEvents { _id }
        }
    }
"#;

#[allow(dead_code)]
pub const CREATE_EVENT: &str = r#"
    mutation CreateEvent($input: EventInput!) {
        createEvent(eventInput: $input) {
            _id
            title
            description
            price
            date
        }
    }
"#;

/// Create a user through the `createUser` mutation and return its id.
#[allow(dead_code)]
pub async fn create_test_user(schema: &AppSchema, username: &str, email: &str) -> Uuid {
    let variables = Variables::from_json(json!({
        "input": { "username": username, "email": email, "password": "secret" }
    }));

    let response = execute_graphql(schema, CREATE_USER, Some(variables), None).await;
    assert!(
        response.errors.is_empty(),
        "createUser should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    Uuid::parse_str(data["createUser"]["_id"].as_str().unwrap()).unwrap()
}

#[allow(dead_code)]
pub fn event_variables(title: &str) -> Variables {
    Variables::from_json(json!({
        "input": {
            "title": title,
            "description": "D",
            "price": 10,
            "date": "2024-01-01"
        }
    }))
}

/// Store whose every call fails, for exercising error propagation.
#[allow(dead_code)]
pub struct FailingStore;

#[allow(dead_code)]
fn down<T>() -> StoreResult<T> {
    Err(StoreError::Db(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl EntityStore for FailingStore {
    async fn list_events(&self) -> StoreResult<Vec<EventRow>> {
        down()
    }

    async fn create_event(&self, _event: NewEvent) -> StoreResult<EventRow> {
        down()
    }

    async fn find_events_by_ids(&self, _ids: &[Uuid]) -> StoreResult<Vec<EventRow>> {
        down()
    }

    async fn find_user_by_email(&self, _email: &str) -> StoreResult<Option<UserRow>> {
        down()
    }

    async fn find_user_by_id(&self, _id: Uuid) -> StoreResult<Option<UserRow>> {
        down()
    }

    async fn find_users_by_ids(&self, _ids: &[Uuid]) -> StoreResult<Vec<UserRow>> {
        down()
    }

    async fn create_user(&self, _user: NewUser) -> StoreResult<UserRow> {
        down()
    }

    async fn append_created_event(&self, _user_id: Uuid, _event_id: Uuid) -> StoreResult<UserRow> {
        down()
    }

    async fn ping(&self) -> StoreResult<()> {
        down()
    }
}

/// Store where the email pre-check finds nothing but the insert still hits the
/// unique constraint, as when two registrations race.
#[allow(dead_code)]
pub struct RacingEmailStore;

#[async_trait]
impl EntityStore for RacingEmailStore {
    async fn list_events(&self) -> StoreResult<Vec<EventRow>> {
        down()
    }

    async fn create_event(&self, _event: NewEvent) -> StoreResult<EventRow> {
        down()
    }

    async fn find_events_by_ids(&self, _ids: &[Uuid]) -> StoreResult<Vec<EventRow>> {
        down()
    }

    async fn find_user_by_email(&self, _email: &str) -> StoreResult<Option<UserRow>> {
        Ok(None)
    }

    async fn find_user_by_id(&self, _id: Uuid) -> StoreResult<Option<UserRow>> {
        down()
    }

    async fn find_users_by_ids(&self, _ids: &[Uuid]) -> StoreResult<Vec<UserRow>> {
        down()
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<UserRow> {
        Err(StoreError::DuplicateEmail(user.email))
    }

    async fn append_created_event(&self, _user_id: Uuid, _event_id: Uuid) -> StoreResult<UserRow> {
        down()
    }

    async fn ping(&self) -> StoreResult<()> {
        down()
    }
}

/// In-memory store whose creator-link write always fails.
#[allow(dead_code)]
#[derive(Default)]
pub struct LinkFailingStore {
    pub inner: InMemoryStore,
}

#[async_trait]
impl EntityStore for LinkFailingStore {
    async fn list_events(&self) -> StoreResult<Vec<EventRow>> {
        self.inner.list_events().await
    }

    async fn create_event(&self, event: NewEvent) -> StoreResult<EventRow> {
        self.inner.create_event(event).await
    }

    async fn find_events_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<EventRow>> {
        self.inner.find_events_by_ids(ids).await
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRow>> {
        self.inner.find_user_by_email(email).await
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        self.inner.find_user_by_id(id).await
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>> {
        self.inner.find_users_by_ids(ids).await
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<UserRow> {
        self.inner.create_user(user).await
    }

    async fn append_created_event(&self, _user_id: Uuid, _event_id: Uuid) -> StoreResult<UserRow> {
        down()
    }

    async fn ping(&self) -> StoreResult<()> {
        self.inner.ping().await
    }
}
