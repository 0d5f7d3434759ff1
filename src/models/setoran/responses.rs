use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Setoran;
use crate::models::PaginationInfo;

// Paginated setoran list
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/setoran.ts")]
pub struct SetoranListResponse {
    pub items: Vec<Setoran>,
    pub pagination: PaginationInfo,
}

// Returned on exam entry: the created row plus the recomputed running total
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/setoran.ts")]
pub struct CreateSetoranResponse {
    pub setoran: Setoran,
    pub total_hafalan: i32,
}
