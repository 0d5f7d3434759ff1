use serde::{Deserialize, Serialize};
use ts_rs::TS;

// A single graded memorization submission
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/setoran.ts")]
pub struct Setoran {
    pub id: i64,
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
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// None while the row is active, set once by the archival workflow.
    pub archived_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Setoran {
    /// Number of verses covered by this submission.
    pub fn ayat_count(&self) -> i32 {
        self.akhir_ayat - self.awal_ayat + 1
    }

    pub fn is_active(&self) -> bool {
        self.archived_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setoran(awal: i32, akhir: i32) -> Setoran {
        Setoran {
            id: 1,
            santri_id: 1,
            tanggal: chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            juz: 1,
            surat: "Al-Baqarah".to_string(),
            awal_ayat: awal,
            akhir_ayat: akhir,
            kelancaran: 5,
            tajwid: 4,
            tahsin: 4,
            catatan: None,
            diuji_oleh: "Ust. Ahmad".to_string(),
            created_at: chrono::Utc::now(),
            archived_at: None,
        }
    }

    #[test]
    fn test_ayat_count_is_inclusive() {
        assert_eq!(setoran(1, 10).ayat_count(), 10);
        assert_eq!(setoran(7, 7).ayat_count(), 1);
    }
}
