use async_graphql::MergedObject;

use crate::gql::domains::events::EventQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(EventQuery);
