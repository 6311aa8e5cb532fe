use actix_web::{post, web, HttpResponse, Responder};
use log::info;

use crate::{
    config::Config,
    dto::{LoginRequest, SignupRequest},
    service, PGPool,
};

use super::reject;

#[post("/signup")]
pub async fn signup(dto: web::Json<SignupRequest>, pool_state: web::Data<PGPool>) -> impl Responder {
    let conn: &PGPool = pool_state.get_ref();
    let new_user = match dto.into_inner().validate() {
        Ok(new_user) => new_user,
        Err(err) => return reject("POST /signup", err),
    };
    match service::user::signup(new_user, conn).await {
        Ok(val) => {
            info!("RESPONSE POST /signup: {:?}", val);
            HttpResponse::Created().json(val)
        },
        Err(err) => reject("POST /signup", err)
    }
}

#[post("/login")]
pub async fn login(
    dto: web::Json<LoginRequest>,
    pool_state: web::Data<PGPool>,
    config: web::Data<Config>
) -> impl Responder {
    let conn: &PGPool = pool_state.get_ref();
    let creds = match dto.into_inner().validate() {
        Ok(creds) => creds,
        Err(err) => return reject("POST /login", err),
    };
    match service::auth::login(creds, &config.jwt_secret, conn).await {
        Ok(val) => HttpResponse::Ok().json(val),
        Err(err) => reject("POST /login", err)
    }
}

#[post("/admin/login")]
pub async fn admin_login(
    dto: web::Json<LoginRequest>,
    pool_state: web::Data<PGPool>,
    config: web::Data<Config>
) -> impl Responder {
    let conn: &PGPool = pool_state.get_ref();
    let creds = match dto.into_inner().validate() {
        Ok(creds) => creds,
        Err(err) => return reject("POST /admin/login", err),
    };
    match service::auth::admin_login(creds, &config.jwt_secret, conn).await {
        Ok(val) => HttpResponse::Ok().json(val),
        Err(err) => reject("POST /admin/login", err)
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(signup)
        .service(login)
        .service(admin_login);
}
