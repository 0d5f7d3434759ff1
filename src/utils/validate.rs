//! Request validation
//!
//! Everything here rejects malformed input before any database call is made.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::setoran::requests::CreateSetoranRequest;
use crate::quran::{find_surah, surah_juz_span};

static NAMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z .,'-]*$").expect("Invalid nama regex"));

pub const KELAS_MIN: i32 = 7;
pub const KELAS_MAX: i32 = 12;

pub fn validate_nama(nama: &str) -> Result<(), String> {
    if nama.trim().is_empty() {
        return Err("nama must not be empty".to_string());
    }
    if nama.len() > 100 {
        return Err("nama must be at most 100 characters".to_string());
    }
    if !NAMA_RE.is_match(nama.trim()) {
        return Err("nama may contain only letters, spaces and .,'-".to_string());
    }
    Ok(())
}

pub fn validate_kelas(kelas: i32) -> Result<(), String> {
    if !(KELAS_MIN..=KELAS_MAX).contains(&kelas) {
        return Err(format!(
            "kelas must be between {KELAS_MIN} and {KELAS_MAX}, got {kelas}"
        ));
    }
    Ok(())
}

fn validate_nilai(label: &str, nilai: i32) -> Result<(), String> {
    if !(1..=5).contains(&nilai) {
        return Err(format!("{label} must be between 1 and 5, got {nilai}"));
    }
    Ok(())
}

/// Validate an exam entry: scores in 1-5, surah known, verse range inside
/// the surah, claimed juz inside the surah's juz span.
pub fn validate_setoran(req: &CreateSetoranRequest) -> Result<(), String> {
    validate_nilai("kelancaran", req.kelancaran)?;
    validate_nilai("tajwid", req.tajwid)?;
    validate_nilai("tahsin", req.tahsin)?;

    if req.diuji_oleh.trim().is_empty() {
        return Err("diuji_oleh must not be empty".to_string());
    }

    if !(1..=30).contains(&req.juz) {
        return Err(format!("juz must be between 1 and 30, got {}", req.juz));
    }

    let surah = find_surah(&req.surat)
        .ok_or_else(|| format!("unknown surat: '{}'", req.surat))?;

    if req.awal_ayat < 1 {
        return Err(format!("awal_ayat must be >= 1, got {}", req.awal_ayat));
    }
    if req.akhir_ayat < req.awal_ayat {
        return Err(format!(
            "akhir_ayat ({}) must be >= awal_ayat ({})",
            req.akhir_ayat, req.awal_ayat
        ));
    }
    if req.akhir_ayat as u32 > surah.jumlah_ayat {
        return Err(format!(
            "akhir_ayat ({}) exceeds {} which has {} ayat",
            req.akhir_ayat, surah.nama, surah.jumlah_ayat
        ));
    }

    let (first_juz, last_juz) = surah_juz_span(surah);
    if !(first_juz..=last_juz).contains(&(req.juz as u32)) {
        return Err(format!(
            "{} lies in juz {first_juz}-{last_juz}, got juz {}",
            surah.nama, req.juz
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateSetoranRequest {
        CreateSetoranRequest {
            santri_id: 1,
            tanggal: chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            juz: 1,
            surat: "Al-Baqarah".to_string(),
            awal_ayat: 1,
            akhir_ayat: 20,
            kelancaran: 5,
            tajwid: 4,
            tahsin: 4,
            catatan: None,
            diuji_oleh: "Ust. Ahmad".to_string(),
        }
    }

    #[test]
    fn test_valid_setoran() {
        assert!(validate_setoran(&base_request()).is_ok());
    }

    #[test]
    fn test_score_out_of_range() {
        let mut req = base_request();
        req.kelancaran = 6;
        assert!(validate_setoran(&req).is_err());
        req.kelancaran = 0;
        assert!(validate_setoran(&req).is_err());
    }

    #[test]
    fn test_unknown_surah() {
        let mut req = base_request();
        req.surat = "Bukan Surat".to_string();
        assert!(validate_setoran(&req).is_err());
    }

    #[test]
    fn test_verse_range_outside_surah() {
        let mut req = base_request();
        req.awal_ayat = 280;
        req.akhir_ayat = 300; // Al-Baqarah has 286
        assert!(validate_setoran(&req).is_err());
    }

    #[test]
    fn test_inverted_range() {
        let mut req = base_request();
        req.awal_ayat = 30;
        req.akhir_ayat = 20;
        assert!(validate_setoran(&req).is_err());
    }

    #[test]
    fn test_juz_outside_surah_span() {
        let mut req = base_request();
        req.juz = 5; // Al-Baqarah spans juz 1-3
        assert!(validate_setoran(&req).is_err());
        req.juz = 3;
        assert!(validate_setoran(&req).is_ok());
    }

    #[test]
    fn test_kelas_bounds() {
        assert!(validate_kelas(7).is_ok());
        assert!(validate_kelas(12).is_ok());
        assert!(validate_kelas(6).is_err());
        assert!(validate_kelas(13).is_err());
    }

    #[test]
    fn test_nama() {
        assert!(validate_nama("Ahmad Fauzi").is_ok());
        assert!(validate_nama("Nu'man Al-Farisi").is_ok());
        assert!(validate_nama("").is_err());
        assert!(validate_nama("1337").is_err());
    }
}
