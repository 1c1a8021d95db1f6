use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{EntityStore, StoreError, StoreResult};
use crate::models::{EventRow, NewEvent, NewUser, UserRow};

/// Process-local store. State lives only as long as the process and is not
/// shared between server instances.
#[derive(Default)]
pub struct InMemoryStore {
    events: RwLock<Vec<EventRow>>,
    users: RwLock<Vec<UserRow>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }

    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn list_events(&self) -> StoreResult<Vec<EventRow>> {
        Ok(self.events.read().clone())
    }

    async fn create_event(&self, event: NewEvent) -> StoreResult<EventRow> {
        let row = EventRow {
            id: Uuid::new_v4(),
            title: event.title,
            description: event.description,
            price: event.price,
            date: event.date,
            creator_id: Some(event.creator_id),
            created_at: Utc::now(),
        };
        self.events.write().push(row.clone());
        Ok(row)
    }

    async fn find_events_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<EventRow>> {
        Ok(self
            .events
            .read()
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRow>> {
        Ok(self.users.read().iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>> {
        Ok(self
            .users
            .read()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<UserRow> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let row = UserRow {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_events: Vec::new(),
            created_at: Utc::now(),
        };
        users.push(row.clone());
        Ok(row)
    }

    async fn append_created_event(&self, user_id: Uuid, event_id: Uuid) -> StoreResult<UserRow> {
        let mut users = self.users.write();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::MissingUser(user_id))?;

        if !user.created_events.contains(&event_id) {
            user.created_events.push(event_id);
        }
        Ok(user.clone())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
