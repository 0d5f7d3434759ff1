use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ArchiveService, run};
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::csv::write_csv;

/// Manual path: hand the pending batch to the operator as CSV. Reads only;
/// rows are marked later by the confirm endpoint.
pub async fn export_pending_csv(
    service: &ArchiveService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let storage = service.get_storage(request);
    let cutoff = run::cutoff_date(chrono::Utc::now(), config.archive.retention_months);

    let pending = match storage.list_pending_setoran(cutoff).await {
        Ok(pending) => pending,
        Err(e) => {
            error!("Failed to list pending setoran: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to export pending setoran",
            )));
        }
    };

    let rows: Vec<Vec<String>> = pending.iter().map(run::setoran_row).collect();
    let body = write_csv(&run::EXPORT_HEADER, &rows);

    let filename = if pending.is_empty() {
        "setoran_pending.csv".to_string()
    } else {
        let start = pending.iter().map(|s| s.tanggal).min().unwrap_or(cutoff);
        let end = pending.iter().map(|s| s.tanggal).max().unwrap_or(cutoff);
        format!("{}.csv", run::archive_name(start, end))
    };

    info!("Exported {} pending setoran as {}", pending.len(), filename);

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(body))
}
