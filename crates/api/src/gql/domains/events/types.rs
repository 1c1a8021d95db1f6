use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use uuid::Uuid;

use crate::gql::domains::users::User;
use crate::gql::loaders::{loader_error, UserLoader};

/// Wire format for `Event.date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Event {
    #[graphql(name = "_id")]
    pub id: ID,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date: String,
    #[graphql(skip)]
    pub creator_id: Option<Uuid>,
}

impl From<infra::models::EventRow> for Event {
    fn from(row: infra::models::EventRow) -> Self {
        Self {
            id: row.id.into(),
            title: row.title,
            description: row.description,
            price: row.price,
            date: row.date.format(DATE_FORMAT).to_string(),
            creator_id: row.creator_id,
        }
    }
}

#[ComplexObject]
impl Event {
    /// The user this event is attributed to, if that user still resolves.
    async fn creator(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(creator_id) = self.creator_id else {
            return Ok(None);
        };

        let loader = ctx.data::<DataLoader<UserLoader>>()?;
        let row = loader.load_one(creator_id).await.map_err(loader_error)?;

        Ok(row.map(User::from))
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is kept.
    pub date: String,
}
