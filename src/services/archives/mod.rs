pub mod confirm;
pub mod export;
pub mod list;
pub mod run;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::archives::requests::{
    ArchiveListParams, ConfirmManualArchiveRequest, RunMigrationRequest,
};
use crate::sheets::{SheetsExporter, SheetsState};
use crate::storage::Storage;

pub struct ArchiveService {
    storage: Option<Arc<dyn Storage>>,
}

impl ArchiveService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_exporter(&self, request: &HttpRequest) -> Option<Arc<dyn SheetsExporter>> {
        request
            .app_data::<actix_web::web::Data<SheetsState>>()
            .and_then(|state| state.exporter.clone())
    }

    pub async fn migration_status(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        status::migration_status(self, request).await
    }

    pub async fn run_migration(
        &self,
        request: &HttpRequest,
        body: RunMigrationRequest,
    ) -> ActixResult<HttpResponse> {
        run::run_migration(self, request, body).await
    }

    // manual path, step 1: download the pending batch as CSV
    pub async fn export_pending_csv(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        export::export_pending_csv(self, request).await
    }

    // manual path, step 2: record the sheet the operator created by hand
    pub async fn confirm_manual_archive(
        &self,
        request: &HttpRequest,
        body: ConfirmManualArchiveRequest,
    ) -> ActixResult<HttpResponse> {
        confirm::confirm_manual_archive(self, request, body).await
    }

    pub async fn list_archives(
        &self,
        request: &HttpRequest,
        params: ArchiveListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_archives(self, request, params).await
    }
}
