pub mod auth;
pub mod event;
pub mod registration;


use actix_cors::Cors;
use actix_web::{web, HttpResponse};
use log::{error, warn};

use crate::errors::ApiError;

/// Any origin may call the API, as a browser frontend on another host does.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Logs a failed request at a level matching the error kind and renders it.
pub(crate) fn reject(route: &str, err: ApiError) -> HttpResponse {
    match err {
        ApiError::Store(_) | ApiError::Internal(_) => {
            error!("[{:} : {:}] {} failed: {:?}", file!(), line!(), route, err)
        }
        _ => warn!("{} rejected: {}", route, err),
    }
    HttpResponse::from_error(err)
}

/// Malformed bodies get the same `{"error": ...}` shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("rejected body for {} {}: {}", req.method(), req.path(), err);
        ApiError::validation("Invalid request body").into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        warn!("rejected path {}: {}", req.path(), err);
        ApiError::validation("A valid event id is required").into()
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .configure(auth::init_routes)
        .service(
            web::scope("/events")
                .configure(event::init_routes)
        )
        .service(
            web::scope("/registrations")
                .configure(registration::init_routes)
        );
}
