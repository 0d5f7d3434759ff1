//! Business data models
//!
//! Request/response shapes and domain entities, separate from the SeaORM
//! entities in `entity`. Types are exported to the frontend via ts-rs.

pub mod achievements;
pub mod archives;
pub mod common;
pub mod santri;
pub mod setoran;

pub use common::pagination::{PaginationInfo, PaginationQuery, normalize_page_params};
pub use common::response::ApiResponse;

use ts_rs::TS;

/// API error codes carried in the response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    Validation = 40001,
    NotFound = 40400,
    SantriNotFound = 40401,
    SetoranNotFound = 40402,
    ArchiveNotFound = 40403,
    InternalServerError = 50000,
    CredentialError = 50300,
    SheetsApiError = 50301,
}

/// Recorded once in main() and shared through app data for uptime reporting
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
