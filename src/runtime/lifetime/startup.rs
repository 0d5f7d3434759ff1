use std::sync::Arc;

use tracing::warn;

use crate::sheets::{self, SheetsState};
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub sheets: SheetsState,
}

/// Prepare everything the server needs before binding: storage (with
/// migrations), the optional Sheets exporter, and the background sweeper.
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // bad credentials fail loudly at startup, missing credentials just
    // disable the automated export path
    let exporter = sheets::create_sheets_exporter().expect("Failed to initialize Sheets exporter");
    let sheets = SheetsState { exporter };

    super::sweeper::spawn_archive_sweeper(storage.clone(), sheets.clone());

    StartupContext { storage, sheets }
}
