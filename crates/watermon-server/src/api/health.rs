//! Health probes

use actix_web::{HttpResponse, Responder, Scope, get, web};
use tracing::warn;

use crate::model::common::AppState;

#[get("/liveness")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[get("/readiness")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data.database_connection.ping().await {
        Ok(()) => HttpResponse::Ok().body("OK"),
        Err(err) => {
            warn!("readiness probe failed: {err}");
            HttpResponse::ServiceUnavailable().body("store unreachable")
        }
    }
}

pub fn routes() -> Scope {
    web::scope("/health").service(liveness).service(readiness)
}
