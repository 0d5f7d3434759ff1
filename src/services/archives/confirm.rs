use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ArchiveService, run};
use crate::config::AppConfig;
use crate::models::archives::entities::CreateArchiveRecord;
use crate::models::archives::requests::ConfirmManualArchiveRequest;
use crate::models::archives::responses::MigrationResultResponse;
use crate::models::{ApiResponse, ErrorCode};

/// Manual path completion: the operator downloaded the CSV, built the sheet
/// by hand and reports it back. Same scan, manifest and mark sequence as the
/// automated run, minus the export.
pub async fn confirm_manual_archive(
    service: &ArchiveService,
    request: &HttpRequest,
    body: ConfirmManualArchiveRequest,
) -> ActixResult<HttpResponse> {
    if body.google_sheet_id.trim().is_empty() || body.google_sheet_url.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "google_sheet_id and google_sheet_url must not be empty",
        )));
    }

    let config = AppConfig::get();
    let storage = service.get_storage(request);
    let now = chrono::Utc::now();
    let cutoff = run::cutoff_date(now, config.archive.retention_months);

    let pending = match storage.list_pending_setoran(cutoff).await {
        Ok(pending) => pending,
        Err(e) => {
            error!("Failed to list pending setoran: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Manual archive confirmation failed",
            )));
        }
    };

    if pending.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Nothing pending to confirm",
        )));
    }

    let period_start = pending.iter().map(|s| s.tanggal).min().unwrap_or(cutoff);
    let period_end = pending.iter().map(|s| s.tanggal).max().unwrap_or(cutoff);
    let archive_name = body
        .archive_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| run::archive_name(period_start, period_end));

    let archive = match storage
        .create_archive(CreateArchiveRecord {
            archive_name,
            google_sheet_id: body.google_sheet_id,
            google_sheet_url: body.google_sheet_url,
            period_start,
            period_end,
            total_records: pending.len() as i32,
        })
        .await
    {
        Ok(archive) => archive,
        Err(e) => {
            error!("Failed to write archive manifest: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Manual archive confirmation failed",
            )));
        }
    };

    let ids: Vec<i64> = pending.iter().map(|s| s.id).collect();
    if let Err(e) = storage.mark_setoran_archived(&ids, now).await {
        // manifest exists, rows stay pending: the next confirm resolves it
        error!("Failed to mark archived rows: {}", e);
        return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            "Manifest written but rows were not marked; retry the confirmation",
        )));
    }

    info!(
        "Manual archive {} confirmed, {} setoran marked",
        archive.archive_name,
        pending.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MigrationResultResponse {
            message: format!("Archived {} setoran", pending.len()),
            records_processed: pending.len() as u64,
            archive_name: Some(archive.archive_name.clone()),
            sheet_url: Some(archive.google_sheet_url.clone()),
            archive_id: Some(archive.id),
        },
        "Manual archive confirmed",
    )))
}
