//! Average-based hafalan progress math
//!
//! The mapping is an approximation: the Qur'an's 6236 ayat are spread evenly
//! over 30 juz of 20 pages, with 2.5 ayat per line and at most 15 lines per
//! page. It is deliberately not mushaf-exact; the constants must not change
//! or progress labels become incompatible with previously displayed values.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Total ayat in the Qur'an.
pub const TOTAL_AYAT: u32 = 6236;
/// Standard juz count.
pub const JUZ_COUNT: u32 = 30;
/// Pages per juz in the standard mushaf layout.
pub const PAGES_PER_JUZ: u32 = 20;
/// Line cap per page.
pub const MAX_LINES_PER_PAGE: u32 = 15;

const AVG_AYAT_PER_JUZ: f64 = TOTAL_AYAT as f64 / JUZ_COUNT as f64;
const AVG_AYAT_PER_PAGE: f64 = AVG_AYAT_PER_JUZ / PAGES_PER_JUZ as f64;
const AVG_AYAT_PER_LINE: f64 = 2.5;

/// Human-meaningful progress descriptor for a verse count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/achievements.ts")]
pub struct HafalanProgress {
    pub juz: u32,
    pub remaining_pages: u32,
    pub remaining_lines: u32,
    pub total_pages: u32,
    pub formatted_progress: String,
}

/// Sortable composite score; juz dominates pages, pages dominate lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/achievements.ts")]
pub struct HafalanScore {
    pub score: i64,
    pub juz: u32,
    pub pages: u32,
    pub lines: u32,
}

fn decompose(ayat_count: u32) -> (u32, u32, u32) {
    let count = ayat_count as f64;

    // count / (TOTAL / 30) computed as an exact integer product, so a full
    // juz never floors to juz-minus-one from rounding noise.
    let juz = ((ayat_count as u64 * JUZ_COUNT as u64) as f64 / TOTAL_AYAT as f64).floor();
    let rem = (count - juz * AVG_AYAT_PER_JUZ).max(0.0);

    let pages = (rem / AVG_AYAT_PER_PAGE).floor();
    let rem = (rem - pages * AVG_AYAT_PER_PAGE).max(0.0);

    let lines = ((rem / AVG_AYAT_PER_LINE).floor() as u32).min(MAX_LINES_PER_PAGE);

    (juz as u32, pages as u32, lines)
}

/// Map a verse count onto completed juz, pages and lines.
pub fn calculate_hafalan_progress(ayat_count: u32) -> HafalanProgress {
    if ayat_count == 0 {
        return HafalanProgress {
            juz: 0,
            remaining_pages: 0,
            remaining_lines: 0,
            total_pages: 0,
            formatted_progress: "0 ayat".to_string(),
        };
    }

    let (juz, pages, lines) = decompose(ayat_count);

    let mut parts = Vec::new();
    if juz > 0 {
        parts.push(format!("{juz} juz"));
    }
    if pages > 0 {
        parts.push(format!("{pages} halaman"));
    }
    if lines > 0 {
        parts.push(format!("{lines} baris"));
    }
    let formatted = if parts.is_empty() {
        format!("{ayat_count} ayat")
    } else {
        parts.join(" ")
    };

    HafalanProgress {
        juz,
        remaining_pages: pages,
        remaining_lines: lines,
        total_pages: juz * PAGES_PER_JUZ + pages,
        formatted_progress: formatted,
    }
}

/// Build the leaderboard sort key for a verse count.
pub fn hafalan_score(ayat_count: u32) -> HafalanScore {
    let (juz, pages, lines) = decompose(ayat_count);
    HafalanScore {
        score: juz as i64 * 1_000_000 + pages as i64 * 1_000 + lines as i64,
        juz,
        pages,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_progress() {
        let p = calculate_hafalan_progress(0);
        assert_eq!(p.juz, 0);
        assert_eq!(p.remaining_pages, 0);
        assert_eq!(p.remaining_lines, 0);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.formatted_progress, "0 ayat");
    }

    #[test]
    fn test_below_one_line_falls_back_to_ayat() {
        // 2 ayat is less than one 2.5-ayat line
        let p = calculate_hafalan_progress(2);
        assert_eq!(p.juz, 0);
        assert_eq!(p.remaining_pages, 0);
        assert_eq!(p.remaining_lines, 0);
        assert_eq!(p.formatted_progress, "2 ayat");
    }

    #[test]
    fn test_twenty_five_ayat_example() {
        // 25 ayat: below one juz (207.87), two average pages (10.393 each),
        // remainder 4.21 ayat is one full line.
        let p = calculate_hafalan_progress(25);
        assert_eq!(p.juz, 0);
        assert_eq!(p.remaining_pages, 2);
        assert_eq!(p.remaining_lines, 1);
        assert_eq!(p.total_pages, 2);
        assert_eq!(p.formatted_progress, "2 halaman 1 baris");

        let s = hafalan_score(25);
        assert_eq!(s.score, 2_001);
    }

    #[test]
    fn test_full_quran() {
        let p = calculate_hafalan_progress(TOTAL_AYAT);
        assert_eq!(p.juz, 30);
        assert_eq!(p.remaining_pages, 0);
        assert_eq!(p.remaining_lines, 0);
        assert_eq!(p.total_pages, 600);
        assert_eq!(p.formatted_progress, "30 juz");
    }

    #[test]
    fn test_juz_dominates_pages_dominates_lines() {
        // one juz beats nineteen pages and change
        assert!(hafalan_score(208).score > hafalan_score(207).score);
        assert_eq!(hafalan_score(208).juz, 1);
        assert_eq!(hafalan_score(207).juz, 0);
        // one page beats any line count
        assert!(hafalan_score(11).score > hafalan_score(10).score);
        assert_eq!(hafalan_score(11).pages, 1);
    }

    #[test]
    fn test_score_monotonic_over_full_range() {
        let mut prev = hafalan_score(0).score;
        for count in 1..=TOTAL_AYAT {
            let score = hafalan_score(count).score;
            assert!(
                score >= prev,
                "score regressed at ayat count {count}: {score} < {prev}"
            );
            prev = score;
        }
    }

    #[test]
    fn test_formatted_skips_zero_units() {
        // exactly one average juz: no trailing "0 halaman 0 baris"
        let p = calculate_hafalan_progress(208);
        assert_eq!(p.formatted_progress, "1 juz");
    }
}
