//! Unified error handling module
//!
//! Errors are generated by a macro that attaches a stable code and a type
//! name to every variant, plus snake_case convenience constructors.

use std::fmt;

macro_rules! define_tahfidz_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TahfidzError {
            $($variant(String),)*
        }

        impl TahfidzError {
            /// Stable error code
            pub fn code(&self) -> &'static str {
                match self {
                    $(TahfidzError::$variant(_) => $code,)*
                }
            }

            /// Human-readable error type name
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TahfidzError::$variant(_) => $type_name,)*
                }
            }

            /// Error detail
            pub fn message(&self) -> &str {
                match self {
                    $(TahfidzError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl TahfidzError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TahfidzError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tahfidz_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    Credential("E008", "Service Credential Error"),
    SheetsApi("E009", "Sheets API Error"),
    FileOperation("E010", "File Operation Error"),
}

impl TahfidzError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TahfidzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TahfidzError {}

impl From<sea_orm::DbErr> for TahfidzError {
    fn from(err: sea_orm::DbErr) -> Self {
        TahfidzError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TahfidzError {
    fn from(err: std::io::Error) -> Self {
        TahfidzError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TahfidzError {
    fn from(err: serde_json::Error) -> Self {
        TahfidzError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TahfidzError {
    fn from(err: chrono::ParseError) -> Self {
        TahfidzError::DateParse(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for TahfidzError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        TahfidzError::Credential(err.to_string())
    }
}

impl From<reqwest::Error> for TahfidzError {
    fn from(err: reqwest::Error) -> Self {
        TahfidzError::SheetsApi(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TahfidzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TahfidzError::database_config("test").code(), "E001");
        assert_eq!(TahfidzError::validation("test").code(), "E004");
        assert_eq!(TahfidzError::credential("test").code(), "E008");
        assert_eq!(TahfidzError::sheets_api("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TahfidzError::credential("test").error_type(),
            "Service Credential Error"
        );
        assert_eq!(
            TahfidzError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = TahfidzError::validation("akhir_ayat must be >= awal_ayat");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("akhir_ayat"));
    }
}
