use actix_web::web;
use log::{error, info};

use crate::{db, dto::{MessageResponse, NewUserDto}, errors::ApiError, PGPool};

use super::crypto;

/// Stores a new user with a bcrypt-hashed password.
///
/// The unique index on `users.email` decides duplicates, so two concurrent
/// signups with one email cannot both succeed.
pub async fn signup(dto: NewUserDto, pool: &PGPool) -> Result<MessageResponse, ApiError> {
    let password = dto.password.clone();
    let pwd_hash = match web::block(move || crypto::hash_password(&password)).await {
        Ok(Ok(pwd_hash)) => pwd_hash,
        Ok(Err(err)) => {
            error!("password hashing failed: {:?}", err);
            return Err(ApiError::Internal("Internal Server Error".to_string()));
        }
        Err(err) => {
            error!("blocking pool error while hashing password: {:?}", err);
            return Err(ApiError::Internal("Internal Server Error".to_string()));
        }
    };

    let res = db::user::create(&dto, &pwd_hash, pool)
        .await
        .map(|pg_query_result| pg_query_result.rows_affected());
    insert_outcome(res, &dto.role)
}

fn insert_outcome(res: Result<u64, sqlx::Error>, role: &str) -> Result<MessageResponse, ApiError> {
    match res {
        Ok(_) => {
            info!("registered user with role '{}'", role);
            Ok(MessageResponse::ok("User registered successfully!"))
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(ApiError::Conflict("Email already exists".to_string()))
        }
        Err(err) => {
            error!("DB error (insert user): {:?}", err);
            Err(ApiError::store("Insert error"))
        }
    }
}
