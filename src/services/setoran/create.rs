use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{SetoranService, total};
use crate::models::setoran::requests::CreateSetoranRequest;
use crate::models::setoran::responses::CreateSetoranResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_setoran;

pub async fn create_setoran(
    service: &SetoranService,
    request: &HttpRequest,
    setoran_data: CreateSetoranRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_setoran(&setoran_data) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
    }

    let storage = service.get_storage(request);

    // the FK would also catch this, but a clean 404 beats a constraint error
    match storage.get_santri_by_id(setoran_data.santri_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SantriNotFound,
                "Santri not found",
            )));
        }
        Err(e) => {
            error!("Failed to check santri {}: {}", setoran_data.santri_id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Setoran creation failed",
            )));
        }
    }

    let setoran = match storage.create_setoran(setoran_data).await {
        Ok(setoran) => setoran,
        Err(e) => {
            error!("Setoran creation failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Setoran creation failed",
            )));
        }
    };

    let total_hafalan = match total::update_total_hafalan(&storage, setoran.santri_id).await {
        Ok(total) => total,
        Err(e) => {
            error!(
                "Total refresh failed for santri {}: {}",
                setoran.santri_id, e
            );
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Setoran stored but total refresh failed",
            )));
        }
    };

    info!(
        "Setoran {} recorded for santri {}, total now {}",
        setoran.id, setoran.santri_id, total_hafalan
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(
        CreateSetoranResponse {
            setoran,
            total_hafalan,
        },
        "Setoran created successfully",
    )))
}
