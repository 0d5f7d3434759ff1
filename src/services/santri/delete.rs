use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SantriService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_santri(
    service: &SantriService,
    request: &HttpRequest,
    santri_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // setoran rows go with the santri via the FK cascade
    match storage.delete_santri(santri_id).await {
        Ok(true) => {
            info!("Santri {} deleted", santri_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Santri deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SantriNotFound,
            "Santri not found",
        ))),
        Err(e) => {
            error!("Failed to delete santri {}: {}", santri_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Santri deletion failed",
            )))
        }
    }
}
