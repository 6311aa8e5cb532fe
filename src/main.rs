pub mod config;
pub mod db;
pub mod handlers;
pub mod service;
pub mod models;
pub mod dto;
pub mod errors;

use actix_web::{HttpServer, App, web};
use config::Config;
use db::init_db_pool;
use dotenv::dotenv;
use log::{error, info};
use service::log::{init_logger, RequestLogger};
use sqlx::{postgres::Postgres, Pool};
use std::io;

type PGPool = Pool<Postgres>;

/// Token lifetimes, in seconds.
const USER_TOKEN_EXP: usize = 60 * 60;
const ADMIN_TOKEN_EXP: usize = 2 * 60 * 60;


#[actix_web::main]
async fn main() -> io::Result<()>{
    dotenv().ok();
    init_logger();
    let config = Config::from_env()
        .map_err(|e| {
            error!("invalid configuration: {}", e);
            io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
        })?;
    let pool: PGPool = init_db_pool(&config).await
        .map_err(|e| {
            error!("failed to connect to postgresql: {:?}", e);
            io::Error::new(io::ErrorKind::Other, e)
        })?;
    let bind_addr = (config.host.clone(), config.port);
    let config = web::Data::new(config);
    info!("server is running on {}:{}", bind_addr.0, bind_addr.1);
    HttpServer::new(move || {
        App::new()
            .wrap(handlers::cors())
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(config.clone())
            .configure(handlers::init_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
