use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use uuid::Uuid;

use crate::gql::domains::events::Event;
use crate::gql::loaders::{loader_error, EventLoader};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    #[graphql(name = "_id")]
    pub id: ID,
    pub username: String,
    pub email: String,
    /// Always null. Neither the password nor its hash leaves the server.
    pub password: Option<String>,
    #[graphql(skip)]
    pub created_event_ids: Vec<Uuid>,
}

impl From<infra::models::UserRow> for User {
    fn from(row: infra::models::UserRow) -> Self {
        Self {
            id: row.id.into(),
            username: row.username,
            email: row.email,
            password: None,
            created_event_ids: row.created_events,
        }
    }
}

#[ComplexObject]
impl User {
    /// Events this user created, oldest first.
    async fn created_events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        if self.created_event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let loader = ctx.data::<DataLoader<EventLoader>>()?;
        let mut rows = loader
            .load_many(self.created_event_ids.iter().copied())
            .await
            .map_err(loader_error)?;

        Ok(self
            .created_event_ids
            .iter()
            .filter_map(|id| rows.remove(id))
            .map(Event::from)
            .collect())
    }
}

#[derive(InputObject)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
