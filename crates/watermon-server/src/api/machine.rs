//! Machine detail endpoints: snapshot submission and retrieval

use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use tracing::error;
use watermon_common::error::WatermonError;

use crate::api::model::MachineDetailInfo;
use crate::model::common::AppState;
use crate::service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddMachineDetailParam {
    date: String,
    water_filled: f64,
    machine_status: String,
    api_key: String,
}

#[post("/addMachineDetails")]
pub async fn add_machine_details(
    data: web::Data<AppState>,
    params: web::Json<AddMachineDetailParam>,
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

    let result = service::machine::append_detail(
        &data.database_connection,
        &params.date,
        params.water_filled,
        &params.machine_status,
        user.id,
    )
    .await;

    match result {
        Ok(()) => HttpResponse::Ok().body("machine detail recorded"),
        Err(err) => {
            error!("failed to record machine detail: {err}");
            HttpResponse::InternalServerError().body(WatermonError::Internal.to_string())
        }
    }
}

#[get("/getMachineDetails")]
pub async fn machine_details(data: web::Data<AppState>) -> impl Responder {
    match service::machine::find_latest_detail(&data.database_connection).await {
        Ok(Some(snapshot)) => HttpResponse::Ok().json(MachineDetailInfo::from(snapshot)),
        Ok(None) => HttpResponse::NotFound().body(WatermonError::NoData("machine").to_string()),
        Err(err) => {
            error!("failed to load latest machine detail: {err}");
            HttpResponse::InternalServerError().body(WatermonError::Internal.to_string())
        }
    }
}
