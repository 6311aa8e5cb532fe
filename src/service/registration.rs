use log::error;

use crate::{db, dto::{MessageResponse, NewRegistrationDto}, errors::ApiError, models::Registration, PGPool};

pub async fn create(dto: NewRegistrationDto, pool: &PGPool) -> Result<MessageResponse, ApiError> {
   match db::registration::create(dto, pool).await {
      Ok(_) => Ok(MessageResponse::ok("Registration successful!")),
      Err(err) => {
         error!("DB error (insert registration): {:?}", err);
         Err(ApiError::store("Database error while registering"))
      }
   }
}

pub async fn get_all(pool: &PGPool) -> Result<Vec<Registration>, ApiError> {
   match db::registration::get_all(pool).await {
      Ok(registrations) => Ok(registrations),
      Err(err) => {
         error!("DB error (registrations): {:?}", err);
         Err(ApiError::store("Database error"))
      }
   }
}
