use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::archives::requests::{
    ArchiveListParams, ConfirmManualArchiveRequest, RunMigrationRequest,
};
use crate::services::ArchiveService;

static ARCHIVE_SERVICE: Lazy<ArchiveService> = Lazy::new(ArchiveService::new_lazy);

pub async fn list_archives(
    req: HttpRequest,
    query: web::Query<ArchiveListParams>,
) -> ActixResult<HttpResponse> {
    ARCHIVE_SERVICE.list_archives(&req, query.into_inner()).await
}

pub async fn migration_status(req: HttpRequest) -> ActixResult<HttpResponse> {
    ARCHIVE_SERVICE.migration_status(&req).await
}

pub async fn run_migration(
    req: HttpRequest,
    body: web::Json<RunMigrationRequest>,
) -> ActixResult<HttpResponse> {
    ARCHIVE_SERVICE.run_migration(&req, body.into_inner()).await
}

pub async fn export_pending_csv(req: HttpRequest) -> ActixResult<HttpResponse> {
    ARCHIVE_SERVICE.export_pending_csv(&req).await
}

pub async fn confirm_manual_archive(
    req: HttpRequest,
    body: web::Json<ConfirmManualArchiveRequest>,
) -> ActixResult<HttpResponse> {
    ARCHIVE_SERVICE
        .confirm_manual_archive(&req, body.into_inner())
        .await
}

pub fn configure_archive_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/archives")
            .service(web::resource("").route(web::get().to(list_archives)))
            .service(web::resource("/status").route(web::get().to(migration_status)))
            .service(web::resource("/migrate").route(web::post().to(run_migration)))
            .service(web::resource("/export").route(web::get().to(export_pending_csv)))
            .service(web::resource("/confirm").route(web::post().to(confirm_manual_archive))),
    );
}
