use actix_web::{Responder, web, get, post, HttpResponse};

use crate::{PGPool, service, dto::NewRegistrationRequest};

use super::reject;

#[post("")]
pub async fn create(dto: web::Json<NewRegistrationRequest>, pool_state: web::Data<PGPool>) -> impl Responder {
    let conn: &PGPool = pool_state.get_ref();
    let registration = match dto.into_inner().validate() {
        Ok(registration) => registration,
        Err(err) => return reject("POST /registrations", err),
    };
    match service::registration::create(registration, conn).await {
        // plain 200, unlike the other create routes
        Ok(val) => HttpResponse::Ok().json(val),
        Err(err) => reject("POST /registrations", err)
    }
}

#[get("")]
pub async fn get_all(pool_state: web::Data<PGPool>) -> impl Responder {
    let conn: &PGPool = pool_state.get_ref();
    match service::registration::get_all(conn).await {
        Ok(registrations) => HttpResponse::Ok().json(registrations),
        Err(err) => reject("GET /registrations", err)
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create)
        .service(get_all);
}
