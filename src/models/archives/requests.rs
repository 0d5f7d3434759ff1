use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// Migration trigger request
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/archives.ts")]
pub struct RunMigrationRequest {
    #[serde(default)]
    pub force: bool,
}

// Manual-path completion: the operator uploaded the CSV themselves and
// reports the resulting spreadsheet back.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/archives.ts")]
pub struct ConfirmManualArchiveRequest {
    /// Derived from the batch date range when absent.
    pub archive_name: Option<String>,
    pub google_sheet_id: String,
    pub google_sheet_url: String,
}

// Manifest list query parameters
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/archives.ts")]
pub struct ArchiveListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}
