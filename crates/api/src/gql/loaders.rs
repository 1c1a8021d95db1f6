use async_graphql::dataloader::Loader;
use infra::{
    models::{EventRow, UserRow},
    EntityStore, StoreError,
};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

// UserLoader - batch load users by ID
#[derive(Clone)]
pub struct UserLoader {
    store: Arc<dyn EntityStore>,
}

impl UserLoader {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for UserLoader {
    type Value = UserRow;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.find_users_by_ids(&ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// EventLoader - batch load events by ID
#[derive(Clone)]
pub struct EventLoader {
    store: Arc<dyn EntityStore>,
}

impl EventLoader {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for EventLoader {
    type Value = EventRow;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.find_events_by_ids(&ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

/// Loader failures are shared between callers, so they arrive wrapped in an `Arc`.
pub fn loader_error(e: Arc<StoreError>) -> async_graphql::Error {
    tracing::error!("Store error in loader: {e}");
    async_graphql::Error::new("Internal database error")
}
