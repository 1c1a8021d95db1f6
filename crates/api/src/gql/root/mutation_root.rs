use async_graphql::MergedObject;

use crate::gql::domains::events::EventMutation;
use crate::gql::domains::users::UserMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(EventMutation, UserMutation);
