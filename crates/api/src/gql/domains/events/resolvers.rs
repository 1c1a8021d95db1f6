use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::auth::CallerIdentity;
use crate::gql::error::GqlError;
use crate::state::AppState;

use super::service;
use super::types::{Event, EventInput};

// ── Queries ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct EventQuery;

#[Object]
impl EventQuery {
    /// All stored events, oldest first.
    async fn events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let state = ctx.data::<AppState>()?;

        let rows = service::list_events(state.store.as_ref()).await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }
}

// ── Mutations ────────────────────────────────────────────────────────

#[derive(Default)]
pub struct EventMutation;

#[Object]
impl EventMutation {
    /// Create an event attributed to the calling user.
    async fn create_event(&self, ctx: &Context<'_>, event_input: EventInput) -> Result<Event> {
        let state = ctx.data::<AppState>()?;

        let creator_id = creator_for_request(ctx, state)?;
        let new_event = service::new_event(event_input, creator_id)?;

        let row = service::create_event(state.store.as_ref(), new_event).await?;

        Ok(row.into())
    }
}

/// Caller identity wins; the configured default creator covers deployments
/// without an authenticator in front.
fn creator_for_request(ctx: &Context<'_>, state: &AppState) -> Result<Uuid, GqlError> {
    ctx.data_opt::<CallerIdentity>()
        .map(|caller| caller.user_id)
        .or(state.config().default_creator_id)
        .ok_or_else(|| GqlError::Validation("Creator identity required".to_string()))
}
