//! History endpoints: event submission and retrieval

use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use tracing::error;
use watermon_common::error::WatermonError;

use crate::api::model::HistoryInfo;
use crate::model::common::AppState;
use crate::service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddHistoryParam {
    date_time: String,
    machine_status: String,
    floor: String,
    api_key: String,
}

#[post("/addHistory")]
pub async fn add_history(
    data: web::Data<AppState>,
    params: web::Json<AddHistoryParam>,
) -> impl Responder {
    let user = match watermon_auth::service::user::find_by_api_key(
        &data.database_connection,
        &params.api_key,
    )
    .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::Unauthorized().body(WatermonError::InvalidApiKey.to_string());
        }
        Err(err) => {
            error!("API key lookup failed: {err}");
            return HttpResponse::InternalServerError().body(WatermonError::Internal.to_string());
        }
    };

    let result = service::history::record(
        &data.database_connection,
        &params.date_time,
        &params.machine_status,
        &params.floor,
        user.id,
    )
    .await;

    match result {
        Ok(()) => HttpResponse::Ok().body("history recorded and machine status updated"),
        Err(err) => {
            error!("failed to record history: {err}");
            HttpResponse::InternalServerError().body(WatermonError::Internal.to_string())
        }
    }
}

#[get("/getLatestHistory")]
pub async fn latest_history(data: web::Data<AppState>) -> impl Responder {
    match service::history::find_latest(&data.database_connection).await {
        Ok(Some(entry)) => HttpResponse::Ok().json(HistoryInfo::from(entry)),
        Ok(None) => HttpResponse::NotFound().body(WatermonError::NoData("history").to_string()),
        Err(err) => {
            error!("failed to load latest history: {err}");
            HttpResponse::InternalServerError().body(WatermonError::Internal.to_string())
        }
    }
}

#[get("/getFullHistory")]
pub async fn full_history(data: web::Data<AppState>) -> impl Responder {
    match service::history::find_all(&data.database_connection).await {
        // An empty log is a normal state, not an error.
        Ok(entries) => HttpResponse::Ok().json(
            entries
                .into_iter()
                .map(HistoryInfo::from)
                .collect::<Vec<HistoryInfo>>(),
        ),
        Err(err) => {
            error!("failed to load history: {err}");
            HttpResponse::InternalServerError().body(WatermonError::Internal.to_string())
        }
    }
}
