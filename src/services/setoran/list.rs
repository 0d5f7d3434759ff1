use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SetoranService;
use crate::models::setoran::requests::{SetoranListParams, SetoranListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_setoran(
    service: &SetoranService,
    request: &HttpRequest,
    params: SetoranListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = SetoranListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        santri_id: params.santri_id,
        juz: params.juz,
        include_archived: params.include_archived.unwrap_or(false),
    };

    match storage.list_setoran_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Setoran list retrieved")))
        }
        Err(e) => {
            error!("Failed to list setoran: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to retrieve setoran list",
            )))
        }
    }
}
