use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SantriService;
use crate::models::santri::requests::UpdateSantriRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_kelas, validate_nama};

pub async fn update_santri(
    service: &SantriService,
    request: &HttpRequest,
    santri_id: i64,
    update_data: UpdateSantriRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref nama) = update_data.nama {
        if let Err(msg) = validate_nama(nama) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
        }
    }
    if let Some(kelas) = update_data.kelas {
        if let Err(msg) = validate_kelas(kelas) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
        }
    }

    let storage = service.get_storage(request);

    match storage.update_santri(santri_id, update_data).await {
        Ok(Some(santri)) => {
            info!("Santri {} updated", santri_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(santri, "Santri updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SantriNotFound,
            "Santri not found",
        ))),
        Err(e) => {
            error!("Failed to update santri {}: {}", santri_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Santri update failed",
            )))
        }
    }
}
