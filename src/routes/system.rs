use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{ApiResponse, AppStartTime};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct HealthResponse {
    pub version: String,
    pub uptime_seconds: i64,
}

pub async fn health(req: HttpRequest) -> ActixResult<HttpResponse> {
    let uptime_seconds = req
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HealthResponse {
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds,
        },
        "ok",
    )))
}

pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/system").service(web::resource("/health").route(web::get().to(health))));
}
