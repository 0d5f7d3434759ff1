use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SantriService;
use crate::models::santri::requests::{SantriListParams, SantriListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_santri(
    service: &SantriService,
    request: &HttpRequest,
    params: SantriListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = SantriListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        jenis_kelamin: params.jenis_kelamin,
        kelas: params.kelas,
        search: params.search,
    };

    match storage.list_santri_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Santri list retrieved")))
        }
        Err(e) => {
            error!("Failed to list santri: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to retrieve santri list",
            )))
        }
    }
}
