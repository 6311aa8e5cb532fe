use actix_web::{Responder, web, get, post, delete, HttpResponse};
use log::info;
use crate::{PGPool, service, dto::NewEventRequest};

use super::reject;

#[get("")]
pub async fn get_all(pool_state: web::Data<PGPool>) -> impl Responder {
   let conn: &PGPool = pool_state.get_ref();
   let res = service::event::get_all(conn)
      .await;
   match res {
      Ok(events) => {
         HttpResponse::Ok().json(events)
      },
      Err(err) => reject("GET /events", err)
   }
}

#[post("")]
pub async fn create(new_event_dto: web::Json<NewEventRequest>, pool_state: web::Data<PGPool>) -> impl Responder {
   let conn: &PGPool = pool_state.get_ref();
   let new_event = match new_event_dto.into_inner().validate() {
      Ok(new_event) => new_event,
      Err(err) => return reject("POST /events", err)
   };
   match service::event::create(new_event, conn).await {
      Ok(response) => {
         info!("RESPONSE POST /events: {:?}", response);
         HttpResponse::Created().json(response)
      },
      Err(err) => reject("POST /events", err)
   }
}

#[delete("/{id}")]
pub async fn delete(id: web::Path<i32>, pool_state: web::Data<PGPool>) -> impl Responder {
   let conn: &PGPool = pool_state.get_ref();
   match service::event::delete(id.into_inner(), conn).await {
      Ok(response) => HttpResponse::Ok().json(response),
      Err(err) => reject("DELETE /events/{id}", err)
   }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
   cfg.service(get_all)
      .service(create)
      .service(delete);
}
