use async_trait::async_trait;
use uuid::Uuid;

use super::{EntityStore, StoreError, StoreResult};
use crate::db::Db;
use crate::models::{EventRow, NewEvent, NewUser, UserRow};
use crate::repos::{events, users};

#[derive(Clone)]
pub struct PgStore {
    db: Db,
}

impl PgStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn list_events(&self) -> StoreResult<Vec<EventRow>> {
        Ok(events::list(&self.db).await?)
    }

    async fn create_event(&self, event: NewEvent) -> StoreResult<EventRow> {
        Ok(events::create(&self.db, &event).await?)
    }

    async fn find_events_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<EventRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(events::list_by_ids(&self.db, ids).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRow>> {
        Ok(users::get_by_email(&self.db, email).await?)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        Ok(users::get_by_id(&self.db, id).await?)
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(users::list_by_ids(&self.db, ids).await?)
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<UserRow> {
        match users::create(&self.db, &user).await {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::debug!(constraint = ?e.constraint(), "Rejected duplicate user email");
                Err(StoreError::DuplicateEmail(user.email))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn append_created_event(&self, user_id: Uuid, event_id: Uuid) -> StoreResult<UserRow> {
        users::append_created_event(&self.db, user_id, event_id)
            .await?
            .ok_or(StoreError::MissingUser(user_id))
    }

    async fn ping(&self) -> StoreResult<()> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.db).await?;
        Ok(())
    }
}
