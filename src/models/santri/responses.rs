use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Santri;
use crate::models::PaginationInfo;

// Paginated santri list
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/santri.ts")]
pub struct SantriListResponse {
    pub items: Vec<Santri>,
    pub pagination: PaginationInfo,
}

// Result of a class-promotion run
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/santri.ts")]
pub struct PromoteKelasResponse {
    pub promoted: u64,
}
