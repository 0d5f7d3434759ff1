use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::santri::entities::Santri;

// Leaderboard entry for the hafalan-volume and regularity boards
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/achievements.ts")]
pub struct SantriAchievement {
    pub rank: usize,
    pub santri: Santri,
    pub score: i64,
    pub juz: u32,
    pub pages: u32,
    pub lines: u32,
    pub formatted_progress: String,
}

// Leaderboard entry for the exam-quality board
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/achievements.ts")]
pub struct TopPerformer {
    pub rank: usize,
    pub santri: Santri,
    /// Mean of (kelancaran + tajwid + tahsin) / 3 over all of the santri's
    /// setoran, rounded to two decimals.
    pub average_score: f64,
    pub total_setoran: i64,
}
