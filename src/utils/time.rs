//! Epoch-second conversions between column values and chrono types
//!
//! Columns store i64 epoch seconds; dates are stored as midnight UTC.

use chrono::{DateTime, NaiveDate, Utc};

pub fn date_to_epoch(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

pub fn epoch_to_date(secs: i64) -> NaiveDate {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

pub fn epoch_to_datetime(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(epoch_to_date(date_to_epoch(date)), date);
    }

    #[test]
    fn test_epoch_zero() {
        assert_eq!(
            epoch_to_date(0),
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        );
    }
}
