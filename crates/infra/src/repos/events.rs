use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{EventRow, NewEvent};

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(
        r#"
        SELECT id, title, description, price, date, creator_id, created_at
        FROM events
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[Uuid],
) -> SqlxResult<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(
        r#"
        SELECT id, title, description, price, date, creator_id, created_at
        FROM events
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: &NewEvent) -> SqlxResult<EventRow> {
    sqlx::query_as::<_, EventRow>(
        r#"
        INSERT INTO events (title, description, price, date, creator_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, description, price, date, creator_id, created_at
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.price)
    .bind(data.date)
    .bind(data.creator_id)
    .fetch_one(executor)
    .await
}
