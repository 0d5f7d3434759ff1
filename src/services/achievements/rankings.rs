//! Leaderboard construction
//!
//! All three boards run through one generic ranking core: a key function
//! maps each santri (plus their active setoran) to an optional sort key.
//! `None` drops the santri from the board, keys sort descending, ties keep
//! the storage order, and the board is cut to the top ten.

use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AchievementService;
use crate::models::achievements::requests::AchievementQuery;
use crate::models::achievements::responses::{SantriAchievement, TopPerformer};
use crate::models::santri::entities::{JenisKelamin, Santri};
use crate::models::setoran::entities::Setoran;
use crate::models::{ApiResponse, ErrorCode};
use crate::quran::{calculate_hafalan_progress, hafalan_score};

pub const LEADERBOARD_SIZE: usize = 10;

fn cache_key(board: &str, jenis_kelamin: Option<JenisKelamin>) -> String {
    match jenis_kelamin {
        Some(jk) => format!("{board}:{jk}"),
        None => format!("{board}:all"),
    }
}

pub(crate) fn group_by_santri(setoran: Vec<Setoran>) -> HashMap<i64, Vec<Setoran>> {
    let mut grouped: HashMap<i64, Vec<Setoran>> = HashMap::new();
    for s in setoran {
        grouped.entry(s.santri_id).or_default().push(s);
    }
    grouped
}

/// Generic ranking core shared by all boards.
pub(crate) fn rank_by<K, F>(
    santri: Vec<Santri>,
    setoran_by_santri: &HashMap<i64, Vec<Setoran>>,
    key: F,
) -> Vec<(usize, Santri, K)>
where
    K: PartialOrd,
    F: Fn(&Santri, &[Setoran]) -> Option<K>,
{
    static EMPTY: &[Setoran] = &[];

    let mut scored: Vec<(Santri, K)> = santri
        .into_iter()
        .filter_map(|s| {
            let rows = setoran_by_santri
                .get(&s.id)
                .map(|v| v.as_slice())
                .unwrap_or(EMPTY);
            key(&s, rows).map(|k| (s, k))
        })
        .collect();

    // stable sort keeps the incoming order for equal keys
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(LEADERBOARD_SIZE);

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (s, k))| (i + 1, s, k))
        .collect()
}

/// Hafalan-volume board: every santri ranks, including those at zero.
pub(crate) fn hafalan_board(santri: Vec<Santri>) -> Vec<SantriAchievement> {
    let empty = HashMap::new();
    rank_by(santri, &empty, |s, _| {
        Some(hafalan_score(s.total_hafalan.max(0) as u32).score)
    })
    .into_iter()
    .map(|(rank, santri, score)| {
        let detail = hafalan_score(santri.total_hafalan.max(0) as u32);
        let progress = calculate_hafalan_progress(santri.total_hafalan.max(0) as u32);
        SantriAchievement {
            rank,
            score,
            juz: detail.juz,
            pages: detail.pages,
            lines: detail.lines,
            formatted_progress: progress.formatted_progress,
            santri,
        }
    })
    .collect()
}

fn average_exam_score(rows: &[Setoran]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let sum: f64 = rows
        .iter()
        .map(|s| (s.kelancaran + s.tajwid + s.tahsin) as f64 / 3.0)
        .sum();
    let mean = sum / rows.len() as f64;
    Some((mean * 100.0).round() / 100.0)
}

/// Exam-quality board: santri with no setoran are excluded, not ranked last.
pub(crate) fn performers_board(
    santri: Vec<Santri>,
    setoran: Vec<Setoran>,
) -> Vec<TopPerformer> {
    let grouped = group_by_santri(setoran);
    rank_by(santri, &grouped, |_, rows| average_exam_score(rows))
        .into_iter()
        .map(|(rank, santri, average_score)| TopPerformer {
            rank,
            average_score,
            total_setoran: grouped.get(&santri.id).map_or(0, |v| v.len() as i64),
            santri,
        })
        .collect()
}

pub async fn top_hafalan(
    service: &AchievementService,
    request: &HttpRequest,
    query: AchievementQuery,
) -> ActixResult<HttpResponse> {
    hafalan_keyed_board(service, request, query, "hafalan").await
}

// Placeholder consistency metric: currently the hafalan key wired through
// the same core, so swapping in a real streak metric only touches the key.
pub async fn top_regularity(
    service: &AchievementService,
    request: &HttpRequest,
    query: AchievementQuery,
) -> ActixResult<HttpResponse> {
    hafalan_keyed_board(service, request, query, "regularity").await
}

async fn hafalan_keyed_board(
    service: &AchievementService,
    request: &HttpRequest,
    query: AchievementQuery,
    board: &str,
) -> ActixResult<HttpResponse> {
    let key = cache_key(board, query.jenis_kelamin);
    if let Some(cached) = service.achievement_cache().get(&key).await {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(cached, "Leaderboard retrieved")));
    }

    let storage = service.get_storage(request);
    let santri = match storage.list_all_santri(query.jenis_kelamin).await {
        Ok(santri) => santri,
        Err(e) => {
            error!("Failed to load santri for {} board: {}", board, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to build leaderboard",
            )));
        }
    };

    let leaderboard = hafalan_board(santri);
    service
        .achievement_cache()
        .insert(key, leaderboard.clone())
        .await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(leaderboard, "Leaderboard retrieved")))
}

pub async fn top_performers(
    service: &AchievementService,
    request: &HttpRequest,
    query: AchievementQuery,
) -> ActixResult<HttpResponse> {
    let key = cache_key("performers", query.jenis_kelamin);
    if let Some(cached) = service.performer_cache().get(&key).await {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(cached, "Leaderboard retrieved")));
    }

    let storage = service.get_storage(request);

    let santri = match storage.list_all_santri(query.jenis_kelamin).await {
        Ok(santri) => santri,
        Err(e) => {
            error!("Failed to load santri for performers board: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to build leaderboard",
            )));
        }
    };
    let setoran = match storage.list_all_active_setoran().await {
        Ok(setoran) => setoran,
        Err(e) => {
            error!("Failed to load setoran for performers board: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to build leaderboard",
            )));
        }
    };

    let leaderboard = performers_board(santri, setoran);
    service
        .performer_cache()
        .insert(key, leaderboard.clone())
        .await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(leaderboard, "Leaderboard retrieved")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn santri(id: i64, nama: &str, total: i32) -> Santri {
        Santri {
            id,
            nama: nama.to_string(),
            kelas: 8,
            jenis_kelamin: JenisKelamin::Ikhwan,
            total_hafalan: total,
            created_at: chrono::Utc::now(),
        }
    }

    fn setoran(santri_id: i64, kelancaran: i32, tajwid: i32, tahsin: i32) -> Setoran {
        Setoran {
            id: 0,
            santri_id,
            tanggal: chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            juz: 1,
            surat: "Al-Fatihah".to_string(),
            awal_ayat: 1,
            akhir_ayat: 7,
            kelancaran,
            tajwid,
            tahsin,
            catatan: None,
            diuji_oleh: "Ust. Budi".to_string(),
            created_at: chrono::Utc::now(),
            archived_at: None,
        }
    }

    #[test]
    fn test_hafalan_board_includes_zero_progress() {
        let board = hafalan_board(vec![santri(1, "Aisyah", 0), santri(2, "Budi", 300)]);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].santri.id, 2);
        assert_eq!(board[1].santri.id, 1);
        assert_eq!(board[1].score, 0);
        assert_eq!(board[1].formatted_progress, "0 ayat");
    }

    #[test]
    fn test_performers_board_excludes_santri_without_setoran() {
        let board = performers_board(
            vec![santri(1, "Aisyah", 50), santri(2, "Budi", 0)],
            vec![setoran(1, 5, 4, 3)],
        );
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].santri.id, 1);
        assert_eq!(board[0].average_score, 4.0);
        assert_eq!(board[0].total_setoran, 1);
    }

    #[test]
    fn test_ties_keep_incoming_order() {
        let board = hafalan_board(vec![
            santri(1, "Aisyah", 100),
            santri(2, "Budi", 100),
            santri(3, "Citra", 100),
        ]);
        let ids: Vec<i64> = board.iter().map(|e| e.santri.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn test_board_truncates_to_top_ten() {
        let many: Vec<Santri> = (1..=15).map(|i| santri(i, "Santri", i as i32 * 10)).collect();
        let board = hafalan_board(many);
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        // highest total first
        assert_eq!(board[0].santri.id, 15);
        assert_eq!(board[9].santri.id, 6);
    }

    #[test]
    fn test_average_is_rounded_to_two_decimals() {
        let rows = vec![setoran(1, 5, 5, 4), setoran(1, 3, 3, 3)];
        // (14/3 + 3) / 2 = 3.8333...
        assert_eq!(average_exam_score(&rows), Some(3.83));
    }
}
