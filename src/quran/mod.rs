//! Quran position mapping
//!
//! Pure functions translating raw memorized-verse counts into juz/page/line
//! progress descriptors and sortable scores, plus the static surah table used
//! for setoran validation.

pub mod progress;
pub mod surah;

pub use progress::{HafalanProgress, HafalanScore, calculate_hafalan_progress, hafalan_score};
pub use surah::{Surah, find_surah, juz_for, surah_juz_span};
