use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ArchiveService;
use crate::models::archives::requests::ArchiveListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_archives(
    service: &ArchiveService,
    request: &HttpRequest,
    params: ArchiveListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_archives_with_pagination(params.pagination.page, params.pagination.size)
        .await
    {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Archive list retrieved")))
        }
        Err(e) => {
            error!("Failed to list archives: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to retrieve archive list",
            )))
        }
    }
}
