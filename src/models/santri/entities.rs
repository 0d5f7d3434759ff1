use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Santri gender
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/santri.ts")]
pub enum JenisKelamin {
    Ikhwan, // male
    Akhwat, // female
}

impl JenisKelamin {
    pub const IKHWAN: &'static str = "ikhwan";
    pub const AKHWAT: &'static str = "akhwat";
}

impl<'de> Deserialize<'de> for JenisKelamin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            JenisKelamin::IKHWAN => Ok(JenisKelamin::Ikhwan),
            JenisKelamin::AKHWAT => Ok(JenisKelamin::Akhwat),
            _ => Err(serde::de::Error::custom(format!(
                "invalid jenis_kelamin: '{s}'. expected: ikhwan, akhwat"
            ))),
        }
    }
}

impl std::fmt::Display for JenisKelamin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JenisKelamin::Ikhwan => write!(f, "{}", JenisKelamin::IKHWAN),
            JenisKelamin::Akhwat => write!(f, "{}", JenisKelamin::AKHWAT),
        }
    }
}

impl std::str::FromStr for JenisKelamin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ikhwan" => Ok(JenisKelamin::Ikhwan),
            "akhwat" => Ok(JenisKelamin::Akhwat),
            _ => Err(format!("Invalid jenis_kelamin: {s}")),
        }
    }
}

// Santri entity
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/santri.ts")]
pub struct Santri {
    pub id: i64,
    pub nama: String,
    pub kelas: i32,
    pub jenis_kelamin: JenisKelamin,
    /// Cached cumulative memorized-verse count, maintained by the setoran
    /// service after every create/delete.
    pub total_hafalan: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_jenis_kelamin_parse() {
        assert_eq!(
            JenisKelamin::from_str("ikhwan").unwrap(),
            JenisKelamin::Ikhwan
        );
        assert_eq!(
            JenisKelamin::from_str("akhwat").unwrap(),
            JenisKelamin::Akhwat
        );
        assert!(JenisKelamin::from_str("other").is_err());
    }

    #[test]
    fn test_jenis_kelamin_deserialize_rejects_unknown() {
        let ok: Result<JenisKelamin, _> = serde_json::from_str("\"ikhwan\"");
        assert!(ok.is_ok());
        let bad: Result<JenisKelamin, _> = serde_json::from_str("\"laki-laki\"");
        assert!(bad.is_err());
    }
}
