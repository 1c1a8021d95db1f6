use chrono::{DateTime, NaiveDate};
use uuid::Uuid;

use infra::models::{EventRow, NewEvent};
use infra::EntityStore;

use crate::gql::error::{GqlError, CREATOR_ABSENT};

use super::types::{EventInput, DATE_FORMAT};

pub fn parse_event_date(raw: &str) -> Result<NaiveDate, GqlError> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| {
            GqlError::Validation(format!(
                "Invalid date '{raw}': expected YYYY-MM-DD or an RFC 3339 timestamp"
            ))
        })
}

/// Turn a validated input into an insert payload attributed to `creator_id`.
pub fn new_event(input: EventInput, creator_id: Uuid) -> Result<NewEvent, GqlError> {
    let date = parse_event_date(&input.date)?;

    Ok(NewEvent {
        title: input.title,
        description: input.description,
        price: input.price,
        date,
        creator_id,
    })
}

/// Persist an event, then link it to its creator.
///
/// The two writes are not atomic. If the creator cannot be found, or the
/// second write fails, the event stays stored without a link from the user.
pub async fn create_event(store: &dyn EntityStore, event: NewEvent) -> Result<EventRow, GqlError> {
    let creator_id = event.creator_id;
    let created = store.create_event(event).await?;
    tracing::info!(event_id = %created.id, creator_id = %creator_id, "Event created");

    let Some(creator) = store.find_user_by_id(creator_id).await? else {
        tracing::warn!(
            event_id = %created.id,
            creator_id = %creator_id,
            "Creator not found; event stored without owner link"
        );
        return Err(GqlError::NotFound(CREATOR_ABSENT.to_string()));
    };

    store.append_created_event(creator.id, created.id).await?;

    Ok(created)
}

pub async fn list_events(store: &dyn EntityStore) -> Result<Vec<EventRow>, GqlError> {
    Ok(store.list_events().await?)
}
