use log::{error, info};

use crate::{db, dto::{MessageResponse, NewEventDto}, errors::ApiError, models::Event, PGPool};

pub async fn create(dto: NewEventDto, pool: &PGPool) -> Result<MessageResponse, ApiError> {
   let res = db::event::create(dto, pool)
      .await;
   match res {
      Ok(pg_query_result) => {
         info!("events inserted: {}", pg_query_result.rows_affected());
         Ok(MessageResponse::ok("Event created successfully"))
      },
      Err(err) => {
         error!("DB error (insert event): {:?}", err);
         Err(ApiError::store("DB error"))
      }
   }
}

pub async fn get_all(pool: &PGPool) -> Result<Vec<Event>, ApiError> {
   let res = db::event::get_all(pool)
      .await;
   match res {
      Ok(events) => Ok(events),
      Err(err) => {
         error!("DB error (events): {:?}", err);
         Err(ApiError::store("DB error"))
      }
   }
}

pub async fn delete(id: i32, pool: &PGPool) -> Result<MessageResponse, ApiError> {
   let res = db::event::delete(id, pool)
      .await;
   delete_outcome(id, res)
}

fn delete_outcome(id: i32, res: Result<u64, sqlx::Error>) -> Result<MessageResponse, ApiError> {
   match res {
      Ok(0) => Err(ApiError::NotFound("Event not found".to_string())),
      Ok(_) => {
         info!("event #{} deleted", id);
         Ok(MessageResponse::ok("Event deleted successfully"))
      },
      Err(err) => {
         error!("DB error (delete event #{}): {:?}", id, err);
         Err(ApiError::store("DB error"))
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn no_deleted_row_means_not_found() {
      assert_eq!(
         delete_outcome(9, Ok(0)).unwrap_err(),
         ApiError::NotFound("Event not found".to_string())
      );
   }

   #[test]
   fn one_deleted_row_is_success() {
      assert_eq!(
         delete_outcome(9, Ok(1)).unwrap(),
         MessageResponse::ok("Event deleted successfully")
      );
   }

   #[test]
   fn store_failure_is_generic() {
      assert_eq!(
         delete_outcome(9, Err(sqlx::Error::PoolTimedOut)).unwrap_err(),
         ApiError::store("DB error")
      );
   }
}
