use sqlx::postgres::PgQueryResult;

use crate::{dto::NewRegistrationDto, models::Registration, PGPool};

pub async fn create(registration: NewRegistrationDto, pool: &PGPool) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query("INSERT INTO registrations (name, email, mobile, message) VALUES ($1, $2, $3, $4)")
        .bind(registration.name)
        .bind(registration.email)
        .bind(registration.mobile)
        .bind(registration.message)
        .execute(pool)
        .await
}

// newest first; id breaks ties between rows sharing a timestamp
pub async fn get_all(pool: &PGPool) -> Result<Vec<Registration>, sqlx::Error> {
    sqlx::query_as::<_, Registration>(
        "SELECT * FROM registrations ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}
