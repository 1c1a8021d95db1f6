use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{NewUser, UserRow};

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, email, password_hash, created_events, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_by_email<'e>(
    executor: impl PgExecutor<'e>,
    email: &str,
) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, email, password_hash, created_events, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[Uuid],
) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, email, password_hash, created_events, created_at
        FROM users
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: &NewUser) -> SqlxResult<UserRow> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (username, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id, username, email, password_hash, created_events, created_at
        "#,
    )
    .bind(&data.username)
    .bind(&data.email)
    .bind(&data.password_hash)
    .fetch_one(executor)
    .await
}

/// Append an event to the user's `created_events`, leaving the list untouched
/// if the event is already there. Returns `None` when the user does not exist.
pub async fn append_created_event<'e>(
    executor: impl PgExecutor<'e>,
    user_id: Uuid,
    event_id: Uuid,
) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET created_events = CASE
                WHEN $2 = ANY(created_events) THEN created_events
                ELSE array_append(created_events, $2)
            END
        WHERE id = $1
        RETURNING id, username, email, password_hash, created_events, created_at
        "#,
    )
    .bind(user_id)
    .bind(event_id)
    .fetch_optional(executor)
    .await
}
