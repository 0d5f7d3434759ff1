use super::entities::JenisKelamin;
use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// Santri list query parameters (from the HTTP request)
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/santri.ts")]
pub struct SantriListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub jenis_kelamin: Option<JenisKelamin>,
    pub kelas: Option<i32>,
    pub search: Option<String>,
}

// Enrollment request
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/santri.ts")]
pub struct CreateSantriRequest {
    pub nama: String,
    pub kelas: i32,
    pub jenis_kelamin: JenisKelamin,
}

// Santri update request
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/santri.ts")]
pub struct UpdateSantriRequest {
    pub nama: Option<String>,
    pub kelas: Option<i32>,
    pub jenis_kelamin: Option<JenisKelamin>,
}

// Storage-layer list query
#[derive(Debug, Clone, Default)]
pub struct SantriListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub jenis_kelamin: Option<JenisKelamin>,
    pub kelas: Option<i32>,
    pub search: Option<String>,
}
