use async_graphql::{Context, Object, Result};

use crate::state::AppState;

use super::service;
use super::types::{User, UserInput};

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Register a user. The returned `password` is always null.
    async fn create_user(&self, ctx: &Context<'_>, user_input: UserInput) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        let row =
            service::create_user(state.store.as_ref(), state.password_service(), user_input)
                .await?;

        Ok(row.into())
    }
}
