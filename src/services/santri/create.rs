use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SantriService;
use crate::models::santri::requests::CreateSantriRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_kelas, validate_nama};

pub async fn create_santri(
    service: &SantriService,
    request: &HttpRequest,
    santri_data: CreateSantriRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_nama(&santri_data.nama) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
    }
    if let Err(msg) = validate_kelas(santri_data.kelas) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_santri(santri_data).await {
        Ok(santri) => {
            info!("Santri {} enrolled with id {}", santri.nama, santri.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(santri, "Santri created successfully")))
        }
        Err(e) => {
            error!("Santri creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Santri creation failed",
            )))
        }
    }
}
