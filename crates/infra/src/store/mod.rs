//! Persistence seam for events and users.
//!
//! Two backends implement [`EntityStore`]: [`PgStore`] over Postgres and
//! [`InMemoryStore`] for single-process deployments and tests. The API layer
//! only ever sees `Arc<dyn EntityStore>`.

mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{EventRow, NewEvent, NewUser, UserRow};

pub use memory::InMemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("a user with email {0} already exists")]
    DuplicateEmail(String),

    #[error("user {0} does not exist")]
    MissingUser(Uuid),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Every stored event, oldest first.
    async fn list_events(&self) -> StoreResult<Vec<EventRow>>;

    async fn create_event(&self, event: NewEvent) -> StoreResult<EventRow>;

    /// Events matching `ids`. Unknown ids are skipped; order is unspecified.
    async fn find_events_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<EventRow>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRow>>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<UserRow>>;

    /// Users matching `ids`. Unknown ids are skipped; order is unspecified.
    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>>;

    /// Fails with [`StoreError::DuplicateEmail`] if the email is taken.
    async fn create_user(&self, user: NewUser) -> StoreResult<UserRow>;

    /// Record `event_id` in the user's created events (at most once) and
    /// persist the user.
    async fn append_created_event(&self, user_id: Uuid, event_id: Uuid) -> StoreResult<UserRow>;

    async fn ping(&self) -> StoreResult<()>;
}
