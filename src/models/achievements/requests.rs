use crate::models::santri::entities::JenisKelamin;
use serde::Deserialize;
use ts_rs::TS;

// Leaderboard query parameters
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/achievements.ts")]
pub struct AchievementQuery {
    pub jenis_kelamin: Option<JenisKelamin>,
}
