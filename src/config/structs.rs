use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub sheets: SheetsConfig,
    pub archive: ArchiveConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// Timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// Request limit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // connection URL (backend inferred from the scheme)
    pub pool_size: u32, // connection pool size
    pub timeout: u64,   // connection timeout (seconds)
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

/// Google Sheets export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Path to the service-account key JSON. Empty = automated export
    /// disabled; the manual CSV path still works.
    pub credentials_path: String,
    /// Per-call timeout in seconds for token exchange and Sheets API calls.
    pub request_timeout: u64,
    /// Extra rows allocated beyond the batch when creating a spreadsheet.
    pub headroom_rows: u64,
}

/// Archival workflow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Retention window: setoran with tanggal older than now minus this many
    /// months become eligible for archival.
    pub retention_months: u32,
    /// Run the background sweeper task.
    pub auto_sweep: bool,
    /// Sweeper tick interval in hours.
    pub sweep_interval_hours: u64,
}
