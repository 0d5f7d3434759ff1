//! Static surah metadata
//!
//! Names use the Indonesian transliteration; lookups normalize case and
//! punctuation so "al baqarah" and "Al-Baqarah" both resolve. Juz spans are
//! derived from the standard Madani juz start points.

/// One chapter of the Qur'an
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surah {
    pub number: u32,
    pub nama: &'static str,
    pub jumlah_ayat: u32,
}

pub const SURAH_COUNT: usize = 114;

#[rustfmt::skip]
pub static SURAH: [Surah; SURAH_COUNT] = [
    Surah { number: 1, nama: "Al-Fatihah", jumlah_ayat: 7 },
    Surah { number: 2, nama: "Al-Baqarah", jumlah_ayat: 286 },
    Surah { number: 3, nama: "Ali 'Imran", jumlah_ayat: 200 },
    Surah { number: 4, nama: "An-Nisa'", jumlah_ayat: 176 },
    Surah { number: 5, nama: "Al-Ma'idah", jumlah_ayat: 120 },
    Surah { number: 6, nama: "Al-An'am", jumlah_ayat: 165 },
    Surah { number: 7, nama: "Al-A'raf", jumlah_ayat: 206 },
    Surah { number: 8, nama: "Al-Anfal", jumlah_ayat: 75 },
    Surah { number: 9, nama: "At-Taubah", jumlah_ayat: 129 },
    Surah { number: 10, nama: "Yunus", jumlah_ayat: 109 },
    Surah { number: 11, nama: "Hud", jumlah_ayat: 123 },
    Surah { number: 12, nama: "Yusuf", jumlah_ayat: 111 },
    Surah { number: 13, nama: "Ar-Ra'd", jumlah_ayat: 43 },
    Surah { number: 14, nama: "Ibrahim", jumlah_ayat: 52 },
    Surah { number: 15, nama: "Al-Hijr", jumlah_ayat: 99 },
    Surah { number: 16, nama: "An-Nahl", jumlah_ayat: 128 },
    Surah { number: 17, nama: "Al-Isra'", jumlah_ayat: 111 },
    Surah { number: 18, nama: "Al-Kahf", jumlah_ayat: 110 },
    Surah { number: 19, nama: "Maryam", jumlah_ayat: 98 },
    Surah { number: 20, nama: "Taha", jumlah_ayat: 135 },
    Surah { number: 21, nama: "Al-Anbiya'", jumlah_ayat: 112 },
    Surah { number: 22, nama: "Al-Hajj", jumlah_ayat: 78 },
    Surah { number: 23, nama: "Al-Mu'minun", jumlah_ayat: 118 },
    Surah { number: 24, nama: "An-Nur", jumlah_ayat: 64 },
    Surah { number: 25, nama: "Al-Furqan", jumlah_ayat: 77 },
    Surah { number: 26, nama: "Asy-Syu'ara'", jumlah_ayat: 227 },
    Surah { number: 27, nama: "An-Naml", jumlah_ayat: 93 },
    Surah { number: 28, nama: "Al-Qasas", jumlah_ayat: 88 },
    Surah { number: 29, nama: "Al-'Ankabut", jumlah_ayat: 69 },
    Surah { number: 30, nama: "Ar-Rum", jumlah_ayat: 60 },
    Surah { number: 31, nama: "Luqman", jumlah_ayat: 34 },
    Surah { number: 32, nama: "As-Sajdah", jumlah_ayat: 30 },
    Surah { number: 33, nama: "Al-Ahzab", jumlah_ayat: 73 },
    Surah { number: 34, nama: "Saba'", jumlah_ayat: 54 },
    Surah { number: 35, nama: "Fatir", jumlah_ayat: 45 },
    Surah { number: 36, nama: "Yasin", jumlah_ayat: 83 },
    Surah { number: 37, nama: "As-Saffat", jumlah_ayat: 182 },
    Surah { number: 38, nama: "Sad", jumlah_ayat: 88 },
    Surah { number: 39, nama: "Az-Zumar", jumlah_ayat: 75 },
    Surah { number: 40, nama: "Ghafir", jumlah_ayat: 85 },
    Surah { number: 41, nama: "Fussilat", jumlah_ayat: 54 },
    Surah { number: 42, nama: "Asy-Syura", jumlah_ayat: 53 },
    Surah { number: 43, nama: "Az-Zukhruf", jumlah_ayat: 89 },
    Surah { number: 44, nama: "Ad-Dukhan", jumlah_ayat: 59 },
    Surah { number: 45, nama: "Al-Jasiyah", jumlah_ayat: 37 },
    Surah { number: 46, nama: "Al-Ahqaf", jumlah_ayat: 35 },
    Surah { number: 47, nama: "Muhammad", jumlah_ayat: 38 },
    Surah { number: 48, nama: "Al-Fath", jumlah_ayat: 29 },
    Surah { number: 49, nama: "Al-Hujurat", jumlah_ayat: 18 },
    Surah { number: 50, nama: "Qaf", jumlah_ayat: 45 },
    Surah { number: 51, nama: "Az-Zariyat", jumlah_ayat: 60 },
    Surah { number: 52, nama: "At-Tur", jumlah_ayat: 49 },
    Surah { number: 53, nama: "An-Najm", jumlah_ayat: 62 },
    Surah { number: 54, nama: "Al-Qamar", jumlah_ayat: 55 },
    Surah { number: 55, nama: "Ar-Rahman", jumlah_ayat: 78 },
    Surah { number: 56, nama: "Al-Waqi'ah", jumlah_ayat: 96 },
    Surah { number: 57, nama: "Al-Hadid", jumlah_ayat: 29 },
    Surah { number: 58, nama: "Al-Mujadalah", jumlah_ayat: 22 },
    Surah { number: 59, nama: "Al-Hasyr", jumlah_ayat: 24 },
    Surah { number: 60, nama: "Al-Mumtahanah", jumlah_ayat: 13 },
    Surah { number: 61, nama: "As-Saff", jumlah_ayat: 14 },
    Surah { number: 62, nama: "Al-Jumu'ah", jumlah_ayat: 11 },
    Surah { number: 63, nama: "Al-Munafiqun", jumlah_ayat: 11 },
    Surah { number: 64, nama: "At-Taghabun", jumlah_ayat: 18 },
    Surah { number: 65, nama: "At-Talaq", jumlah_ayat: 12 },
    Surah { number: 66, nama: "At-Tahrim", jumlah_ayat: 12 },
    Surah { number: 67, nama: "Al-Mulk", jumlah_ayat: 30 },
    Surah { number: 68, nama: "Al-Qalam", jumlah_ayat: 52 },
    Surah { number: 69, nama: "Al-Haqqah", jumlah_ayat: 52 },
    Surah { number: 70, nama: "Al-Ma'arij", jumlah_ayat: 44 },
    Surah { number: 71, nama: "Nuh", jumlah_ayat: 28 },
    Surah { number: 72, nama: "Al-Jinn", jumlah_ayat: 28 },
    Surah { number: 73, nama: "Al-Muzzammil", jumlah_ayat: 20 },
    Surah { number: 74, nama: "Al-Muddassir", jumlah_ayat: 56 },
    Surah { number: 75, nama: "Al-Qiyamah", jumlah_ayat: 40 },
    Surah { number: 76, nama: "Al-Insan", jumlah_ayat: 31 },
    Surah { number: 77, nama: "Al-Mursalat", jumlah_ayat: 50 },
    Surah { number: 78, nama: "An-Naba'", jumlah_ayat: 40 },
    Surah { number: 79, nama: "An-Nazi'at", jumlah_ayat: 46 },
    Surah { number: 80, nama: "'Abasa", jumlah_ayat: 42 },
    Surah { number: 81, nama: "At-Takwir", jumlah_ayat: 29 },
    Surah { number: 82, nama: "Al-Infitar", jumlah_ayat: 19 },
    Surah { number: 83, nama: "Al-Mutaffifin", jumlah_ayat: 36 },
    Surah { number: 84, nama: "Al-Insyiqaq", jumlah_ayat: 25 },
    Surah { number: 85, nama: "Al-Buruj", jumlah_ayat: 22 },
    Surah { number: 86, nama: "At-Tariq", jumlah_ayat: 17 },
    Surah { number: 87, nama: "Al-A'la", jumlah_ayat: 19 },
    Surah { number: 88, nama: "Al-Ghasyiyah", jumlah_ayat: 26 },
    Surah { number: 89, nama: "Al-Fajr", jumlah_ayat: 30 },
    Surah { number: 90, nama: "Al-Balad", jumlah_ayat: 20 },
    Surah { number: 91, nama: "Asy-Syams", jumlah_ayat: 15 },
    Surah { number: 92, nama: "Al-Lail", jumlah_ayat: 21 },
    Surah { number: 93, nama: "Ad-Duha", jumlah_ayat: 11 },
    Surah { number: 94, nama: "Asy-Syarh", jumlah_ayat: 8 },
    Surah { number: 95, nama: "At-Tin", jumlah_ayat: 8 },
    Surah { number: 96, nama: "Al-'Alaq", jumlah_ayat: 19 },
    Surah { number: 97, nama: "Al-Qadr", jumlah_ayat: 5 },
    Surah { number: 98, nama: "Al-Bayyinah", jumlah_ayat: 8 },
    Surah { number: 99, nama: "Az-Zalzalah", jumlah_ayat: 8 },
    Surah { number: 100, nama: "Al-'Adiyat", jumlah_ayat: 11 },
    Surah { number: 101, nama: "Al-Qari'ah", jumlah_ayat: 11 },
    Surah { number: 102, nama: "At-Takasur", jumlah_ayat: 8 },
    Surah { number: 103, nama: "Al-'Asr", jumlah_ayat: 3 },
    Surah { number: 104, nama: "Al-Humazah", jumlah_ayat: 9 },
    Surah { number: 105, nama: "Al-Fil", jumlah_ayat: 5 },
    Surah { number: 106, nama: "Quraisy", jumlah_ayat: 4 },
    Surah { number: 107, nama: "Al-Ma'un", jumlah_ayat: 7 },
    Surah { number: 108, nama: "Al-Kausar", jumlah_ayat: 3 },
    Surah { number: 109, nama: "Al-Kafirun", jumlah_ayat: 6 },
    Surah { number: 110, nama: "An-Nasr", jumlah_ayat: 3 },
    Surah { number: 111, nama: "Al-Lahab", jumlah_ayat: 5 },
    Surah { number: 112, nama: "Al-Ikhlas", jumlah_ayat: 4 },
    Surah { number: 113, nama: "Al-Falaq", jumlah_ayat: 5 },
    Surah { number: 114, nama: "An-Nas", jumlah_ayat: 6 },
];

/// Madani juz start points as (surah, ayat) pairs; index 0 is juz 1.
#[rustfmt::skip]
static JUZ_STARTS: [(u32, u32); 30] = [
    (1, 1), (2, 142), (2, 253), (3, 93), (4, 24), (4, 148), (5, 82), (6, 111),
    (7, 88), (8, 41), (9, 93), (11, 6), (12, 53), (15, 1), (17, 1), (18, 75),
    (21, 1), (23, 1), (25, 21), (27, 56), (29, 46), (33, 31), (36, 28),
    (39, 32), (41, 47), (46, 1), (51, 31), (58, 1), (67, 1), (78, 1),
];

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Look up a surah by name, ignoring case and punctuation.
pub fn find_surah(name: &str) -> Option<&'static Surah> {
    let needle = normalize(name);
    SURAH.iter().find(|s| normalize(s.nama) == needle)
}

/// The juz containing a given (surah, ayat) position.
pub fn juz_for(surah_number: u32, ayat: u32) -> u32 {
    let mut juz = 1;
    for (i, &(s, a)) in JUZ_STARTS.iter().enumerate() {
        if (surah_number, ayat) >= (s, a) {
            juz = i as u32 + 1;
        } else {
            break;
        }
    }
    juz
}

/// Inclusive juz range a surah spans.
pub fn surah_juz_span(surah: &Surah) -> (u32, u32) {
    (
        juz_for(surah.number, 1),
        juz_for(surah.number, surah.jumlah_ayat),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quran::progress::TOTAL_AYAT;

    #[test]
    fn test_table_covers_whole_quran() {
        assert_eq!(SURAH.len(), 114);
        let total: u32 = SURAH.iter().map(|s| s.jumlah_ayat).sum();
        assert_eq!(total, TOTAL_AYAT);
    }

    #[test]
    fn test_find_surah_normalizes() {
        assert_eq!(find_surah("Al-Baqarah").map(|s| s.number), Some(2));
        assert_eq!(find_surah("al baqarah").map(|s| s.number), Some(2));
        assert_eq!(find_surah("ALBAQARAH").map(|s| s.number), Some(2));
        assert_eq!(find_surah("an-nisa").map(|s| s.number), Some(4));
        assert!(find_surah("Tidak Ada").is_none());
    }

    #[test]
    fn test_juz_boundaries() {
        assert_eq!(juz_for(1, 1), 1);
        assert_eq!(juz_for(2, 141), 1);
        assert_eq!(juz_for(2, 142), 2);
        assert_eq!(juz_for(78, 1), 30);
        assert_eq!(juz_for(114, 6), 30);
    }

    #[test]
    fn test_surah_juz_spans() {
        let baqarah = find_surah("Al-Baqarah").unwrap();
        assert_eq!(surah_juz_span(baqarah), (1, 3));
        let fatihah = find_surah("Al-Fatihah").unwrap();
        assert_eq!(surah_juz_span(fatihah), (1, 1));
        let yasin = find_surah("Yasin").unwrap();
        assert_eq!(surah_juz_span(yasin), (22, 23));
    }
}
