//! User info endpoint

use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;
use tracing::error;
use watermon_common::error::WatermonError;

use crate::api::model::UserInfo;
use crate::model::common::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserInfoParam {
    user_name: Option<String>,
    password: Option<String>,
}

#[get("/getUserInfo")]
pub async fn user_info(
    data: web::Data<AppState>,
    params: web::Query<UserInfoParam>,
) -> impl Responder {
    // Presence is checked before any store access.
    let (Some(user_name), Some(password)) =
        (params.user_name.as_deref(), params.password.as_deref())
    else {
        return HttpResponse::BadRequest().body(WatermonError::MissingCredentials.to_string());
    };

    match watermon_auth::service::user::authenticate(&data.database_connection, user_name, password)
        .await
    {
        Ok(Some(user)) => HttpResponse::Ok().json(UserInfo {
            api: user.api_key,
            floor: user.floor,
        }),
        Ok(None) => HttpResponse::NotFound().body(WatermonError::UserNotFound.to_string()),
        Err(err) => {
            error!("user lookup failed: {err}");
            HttpResponse::InternalServerError().body(WatermonError::Internal.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use watermon_persistence::entity::users;
    use watermon_persistence::sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

    use super::*;
    use crate::model::common::Configuration;

    fn test_state(db: DatabaseConnection) -> web::Data<AppState> {
        web::Data::new(AppState {
            configuration: Configuration::default(),
            database_connection: db,
        })
    }

    fn user_row(password_hash: &str) -> users::Model {
        users::Model {
            id: 7,
            username: "alice".to_string(),
            password: password_hash.to_string(),
            api_key: "key-7".to_string(),
            floor: "3".to_string(),
            gmt_create: chrono::DateTime::from_timestamp(1_700_000_000, 0)
                .unwrap()
                .naive_utc(),
        }
    }

    #[actix_web::test]
    async fn user_info_requires_both_params() {
        let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
        let app = test::init_service(
            App::new()
                .app_data(test_state(db))
                .service(user_info),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/getUserInfo?userName=alice")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn user_info_returns_key_and_floor() {
        let hash = bcrypt::hash("secret", 4).unwrap();
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![user_row(&hash)]])
            .into_connection();
        let app = test::init_service(
            App::new()
                .app_data(test_state(db))
                .service(user_info),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/getUserInfo?userName=alice&password=secret")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({"API": "key-7", "Floor": "3"}));
    }

    #[actix_web::test]
    async fn user_info_wrong_password_is_not_found() {
        let hash = bcrypt::hash("secret", 4).unwrap();
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![user_row(&hash)]])
            .into_connection();
        let app = test::init_service(
            App::new()
                .app_data(test_state(db))
                .service(user_info),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/getUserInfo?userName=alice&password=guess")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
