use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SantriService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_santri(
    service: &SantriService,
    request: &HttpRequest,
    santri_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_santri_by_id(santri_id).await {
        Ok(Some(santri)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(santri, "Santri retrieved")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SantriNotFound,
            "Santri not found",
        ))),
        Err(e) => {
            error!("Failed to get santri {}: {}", santri_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to retrieve santri",
            )))
        }
    }
}
