use sqlx::postgres::PgQueryResult;

use crate::{dto::NewEventDto, models::Event, PGPool};

pub async fn create(event: NewEventDto, pool: &PGPool) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query(
        "INSERT INTO events (title, date, time, total_seats, left_seats, location, tags, highlights, organizer, description, banner_image)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(event.title)
    .bind(event.date)
    .bind(event.time)
    .bind(event.total_seats)
    .bind(event.left_seats)
    .bind(event.location)
    .bind(event.tags)
    .bind(event.highlights)
    .bind(event.organizer)
    .bind(event.description)
    .bind(event.banner_image)
    .execute(pool)
    .await
}

pub async fn get_all(pool: &PGPool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>("SELECT * FROM events")
        .fetch_all(pool)
        .await
}

// /events/{id}
pub async fn delete(id: i32, pool: &PGPool) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
