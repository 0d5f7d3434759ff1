use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::SetoranArchive;
use crate::models::PaginationInfo;

// GET /archives/status payload
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/archives.ts")]
pub struct MigrationStatusResponse {
    pub latest_archive: Option<SetoranArchive>,
    /// Active setoran older than the cutoff, counted fresh on every call.
    pub pending_migration_count: u64,
    pub cutoff_date: chrono::NaiveDate,
}

// POST /archives/migrate and /archives/confirm payload
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/archives.ts")]
pub struct MigrationResultResponse {
    pub message: String,
    pub records_processed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_id: Option<i64>,
}

// Paginated manifest list
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/archives.ts")]
pub struct ArchiveListResponse {
    pub items: Vec<SetoranArchive>,
    pub pagination: PaginationInfo,
}
