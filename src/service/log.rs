use colored::Colorize;
use env_logger::Builder;
use log::{info, Level, LevelFilter};
use std::io::Write;
use std::future::{ready, Ready};
use std::time::Instant;
use actix_web::{
   dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
   Error,
};
use futures_util::future::LocalBoxFuture;

/// Logs every request line and the status it was answered with.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
   S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
   S::Future: 'static,
   B: 'static,
{
   type Response = ServiceResponse<B>;
   type Error = Error;
   type InitError = ();
   type Transform = RequestLoggerService<S>;
   type Future = Ready<Result<Self::Transform, Self::InitError>>;

   fn new_transform(&self, service: S) -> Self::Future {
      ready(Ok(RequestLoggerService { service }))
   }
}

pub struct RequestLoggerService<S> {
   service: S
}

impl<S, B> Service<ServiceRequest> for RequestLoggerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
   type Response = ServiceResponse<B>;
   type Error = Error;
   type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

   forward_ready!(service);

   fn call(&self, req: ServiceRequest) -> Self::Future {
      let line = format!("{} {}", req.method(), req.uri());
      info!("request: {}", line);
      let started = Instant::now();
      let fut = self.service.call(req);

      Box::pin(async move {
         let res = fut.await?;
         info!(
            "response: {} -> {} in {}ms",
            line,
            res.status(),
            started.elapsed().as_millis()
         );
         Ok(res)
      })
   }
}

fn paint(level: Level) -> colored::ColoredString {
   let label = level.to_string();
   match level {
      Level::Error => label.red().bold(),
      Level::Warn => label.yellow().bold(),
      Level::Info => label.green().bold(),
      Level::Debug => label.blue().bold(),
      Level::Trace => label.magenta().bold(),
   }
}

/// `RUST_LOG` overrides the default `info` level.
pub fn init_logger() {
   Builder::new()
   .filter_level(LevelFilter::Info)
   .parse_default_env()
   .format(|buf, record| {
      writeln!(
         buf,
         "{} {} [{}] {}",
         chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
         paint(record.level()),
         record.target(),
         record.args()
      )
   })
   .init()
}

#[cfg(test)]
mod tests {
   use super::*;
   use actix_web::{test, web, App, HttpResponse};

   #[actix_rt::test]
   async fn middleware_passes_response_through() {
      let app = test::init_service(
         App::new()
            .wrap(RequestLogger)
            .route("/ping", web::get().to(|| async { HttpResponse::Ok().body("pong") })),
      )
      .await;
      let req = test::TestRequest::get().uri("/ping").to_request();
      let resp = test::call_service(&app, req).await;
      assert!(resp.status().is_success());
      let body = test::read_body(resp).await;
      assert_eq!(body, actix_web::web::Bytes::from_static(b"pong"));
   }
}
