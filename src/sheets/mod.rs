//! Google Sheets export
//!
//! Service-account credential signing plus a thin Sheets v4 client. The
//! archival workflow talks to the [`SheetsExporter`] trait so tests can swap
//! in a fake; [`create_sheets_exporter`] wires the real client from config.

mod client;
mod signer;

pub use client::GoogleSheetsClient;
pub use signer::{ServiceAccountKey, TokenSigner};

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use tracing::info;

/// Exporter handle shared through actix app data. `None` means no
/// credentials were configured and only the manual CSV path is available.
#[derive(Clone)]
pub struct SheetsState {
    pub exporter: Option<Arc<dyn SheetsExporter>>,
}

/// Identity of a created spreadsheet.
#[derive(Debug, Clone)]
pub struct SheetHandle {
    pub spreadsheet_id: String,
    pub spreadsheet_url: String,
}

/// Pushes one batch of rows into a freshly created spreadsheet.
#[async_trait::async_trait]
pub trait SheetsExporter: Send + Sync {
    async fn export(
        &self,
        title: &str,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<SheetHandle>;
}

/// Build the real exporter from config. Returns `None` when no credentials
/// are configured; the workflow then falls back to the manual CSV path.
pub fn create_sheets_exporter() -> Result<Option<Arc<dyn SheetsExporter>>> {
    let config = AppConfig::get();

    if config.sheets.credentials_path.is_empty() {
        info!("no Sheets credentials configured, automated export disabled");
        return Ok(None);
    }

    let key = ServiceAccountKey::load(&config.sheets.credentials_path)?;
    info!("Sheets export enabled, service account: {}", key.client_email);

    let signer = TokenSigner::new(key)?;
    let client = GoogleSheetsClient::new(signer, &config.sheets)?;

    Ok(Some(Arc::new(client)))
}
