use sqlx::postgres::PgQueryResult;

use crate::{dto::NewUserDto, models::User, PGPool};

pub async fn create(user: &NewUserDto, pwd_hash: &str, pool: &PGPool) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (name, email, mobile, password, role)
        VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.mobile)
    .bind(pwd_hash)
    .bind(&user.role)
    .execute(pool)
    .await
}

pub async fn get_by_email(email: &str, pool: &PGPool) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn get_admin_by_email(email: &str, pool: &PGPool) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1 AND role = 'admin'")
        .bind(email)
        .fetch_optional(pool)
        .await
}
