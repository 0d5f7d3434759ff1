use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ArchiveService, run};
use crate::config::AppConfig;
use crate::models::archives::responses::MigrationStatusResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn migration_status(
    service: &ArchiveService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let storage = service.get_storage(request);
    let cutoff = run::cutoff_date(chrono::Utc::now(), config.archive.retention_months);

    let latest_archive = match storage.latest_archive().await {
        Ok(latest) => latest,
        Err(e) => {
            error!("Failed to read latest archive: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to read migration status",
            )));
        }
    };

    // counted fresh every call, never cached
    let pending_migration_count = match storage.count_pending_setoran(cutoff).await {
        Ok(count) => count,
        Err(e) => {
            error!("Failed to count pending setoran: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to read migration status",
            )));
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MigrationStatusResponse {
            latest_archive,
            pending_migration_count,
            cutoff_date: cutoff,
        },
        "Migration status retrieved",
    )))
}
