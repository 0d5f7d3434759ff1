use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Archive manifest: where one batch of setoran went and what it covered
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/archives.ts")]
pub struct SetoranArchive {
    pub id: i64,
    pub archive_name: String,
    pub google_sheet_id: String,
    pub google_sheet_url: String,
    pub period_start: chrono::NaiveDate,
    pub period_end: chrono::NaiveDate,
    pub total_records: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// Manifest insert payload (storage-layer)
#[derive(Debug, Clone)]
pub struct CreateArchiveRecord {
    pub archive_name: String,
    pub google_sheet_id: String,
    pub google_sheet_url: String,
    pub period_start: chrono::NaiveDate,
    pub period_end: chrono::NaiveDate,
    pub total_records: i32,
}
