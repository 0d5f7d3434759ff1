use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{SetoranService, total};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_setoran(
    service: &SetoranService,
    request: &HttpRequest,
    setoran_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // the row is gone after delete, so grab the owner first
    let santri_id = match storage.get_setoran_by_id(setoran_id).await {
        Ok(Some(setoran)) => setoran.santri_id,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SetoranNotFound,
                "Setoran not found",
            )));
        }
        Err(e) => {
            error!("Failed to get setoran {}: {}", setoran_id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Setoran deletion failed",
            )));
        }
    };

    if let Err(e) = storage.delete_setoran(setoran_id).await {
        error!("Setoran deletion failed: {}", e);
        return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            "Setoran deletion failed",
        )));
    }

    match total::update_total_hafalan(&storage, santri_id).await {
        Ok(total) => {
            info!(
                "Setoran {} deleted, santri {} total now {}",
                setoran_id, santri_id, total
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Setoran deleted successfully")))
        }
        Err(e) => {
            error!("Total refresh failed for santri {}: {}", santri_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Setoran deleted but total refresh failed",
            )))
        }
    }
}
