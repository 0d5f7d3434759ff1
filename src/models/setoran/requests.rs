use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// Setoran list query parameters (from the HTTP request)
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/setoran.ts")]
pub struct SetoranListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub santri_id: Option<i64>,
    pub juz: Option<i32>,
    /// Archived rows are hidden unless explicitly requested.
    pub include_archived: Option<bool>,
}

// Exam entry request
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/setoran.ts")]
pub struct CreateSetoranRequest {
    pub santri_id: i64,
    pub tanggal: chrono::NaiveDate,
    pub juz: i32,
    pub surat: String,
    pub awal_ayat: i32,
    pub akhir_ayat: i32,
    pub kelancaran: i32,
    pub tajwid: i32,
    pub tahsin: i32,
    pub catatan: Option<String>,
    pub diuji_oleh: String,
}

// Storage-layer list query
#[derive(Debug, Clone, Default)]
pub struct SetoranListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub santri_id: Option<i64>,
    pub juz: Option<i32>,
    pub include_archived: bool,
}
