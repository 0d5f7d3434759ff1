//! SeaORM storage implementation
//!
//! Single storage layer supporting SQLite, PostgreSQL and MySQL, with the
//! backend inferred from the connection URL scheme.

mod archives;
mod santri;
mod setoran;

use crate::config::AppConfig;
use crate::errors::{Result, TahfidzError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// Connect, run migrations, return the storage instance
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite-specific connection (WAL + pragma tuning)
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TahfidzError::database_config(format!("bad SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                TahfidzError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Generic connection (PostgreSQL, MySQL)
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TahfidzError::database_connection(format!("cannot connect: {e}")))
    }

    /// Infer the backend from the URL and normalize it
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TahfidzError::database_config(format!(
                "cannot infer database backend from URL: {url}. supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Row -> business model conversions
use crate::entity::prelude::{SantriModel, SetoranArchiveModel, SetoranModel};
use crate::models::santri::entities::{JenisKelamin, Santri};
use crate::models::setoran::entities::Setoran;
use crate::utils::time::{epoch_to_date, epoch_to_datetime};

impl SantriModel {
    pub(crate) fn into_santri(self) -> Santri {
        Santri {
            id: self.id,
            nama: self.nama,
            kelas: self.kelas,
            jenis_kelamin: self
                .jenis_kelamin
                .parse()
                .unwrap_or(JenisKelamin::Ikhwan),
            total_hafalan: self.total_hafalan,
            created_at: epoch_to_datetime(self.created_at),
        }
    }
}

impl SetoranModel {
    pub(crate) fn into_setoran(self) -> Setoran {
        Setoran {
            id: self.id,
            santri_id: self.santri_id,
            tanggal: epoch_to_date(self.tanggal),
            juz: self.juz,
            surat: self.surat,
            awal_ayat: self.awal_ayat,
            akhir_ayat: self.akhir_ayat,
            kelancaran: self.kelancaran,
            tajwid: self.tajwid,
            tahsin: self.tahsin,
            catatan: self.catatan,
            diuji_oleh: self.diuji_oleh,
            created_at: epoch_to_datetime(self.created_at),
            archived_at: self.archived_at.map(epoch_to_datetime),
        }
    }
}

impl SetoranArchiveModel {
    pub(crate) fn into_archive(self) -> crate::models::archives::entities::SetoranArchive {
        crate::models::archives::entities::SetoranArchive {
            id: self.id,
            archive_name: self.archive_name,
            google_sheet_id: self.google_sheet_id,
            google_sheet_url: self.google_sheet_url,
            period_start: epoch_to_date(self.period_start),
            period_end: epoch_to_date(self.period_end),
            total_records: self.total_records,
            created_at: epoch_to_datetime(self.created_at),
        }
    }
}

// Storage trait implementation
use crate::models::{
    archives::{
        entities::{CreateArchiveRecord, SetoranArchive},
        responses::ArchiveListResponse,
    },
    santri::{
        requests::{CreateSantriRequest, SantriListQuery, UpdateSantriRequest},
        responses::SantriListResponse,
    },
    setoran::{
        requests::{CreateSetoranRequest, SetoranListQuery},
        responses::SetoranListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[async_trait]
impl Storage for SeaOrmStorage {
    // santri module
    async fn create_santri(&self, santri: CreateSantriRequest) -> Result<Santri> {
        self.create_santri_impl(santri).await
    }

    async fn get_santri_by_id(&self, id: i64) -> Result<Option<Santri>> {
        self.get_santri_by_id_impl(id).await
    }

    async fn list_santri_with_pagination(
        &self,
        query: SantriListQuery,
    ) -> Result<SantriListResponse> {
        self.list_santri_with_pagination_impl(query).await
    }

    async fn list_all_santri(&self, jenis_kelamin: Option<JenisKelamin>) -> Result<Vec<Santri>> {
        self.list_all_santri_impl(jenis_kelamin).await
    }

    async fn update_santri(
        &self,
        id: i64,
        update: UpdateSantriRequest,
    ) -> Result<Option<Santri>> {
        self.update_santri_impl(id, update).await
    }

    async fn delete_santri(&self, id: i64) -> Result<bool> {
        self.delete_santri_impl(id).await
    }

    async fn promote_all_kelas(&self) -> Result<u64> {
        self.promote_all_kelas_impl().await
    }

    async fn set_total_hafalan(&self, santri_id: i64, total: i32) -> Result<bool> {
        self.set_total_hafalan_impl(santri_id, total).await
    }

    // setoran module
    async fn create_setoran(&self, setoran: CreateSetoranRequest) -> Result<Setoran> {
        self.create_setoran_impl(setoran).await
    }

    async fn get_setoran_by_id(&self, id: i64) -> Result<Option<Setoran>> {
        self.get_setoran_by_id_impl(id).await
    }

    async fn list_setoran_with_pagination(
        &self,
        query: SetoranListQuery,
    ) -> Result<SetoranListResponse> {
        self.list_setoran_with_pagination_impl(query).await
    }

    async fn delete_setoran(&self, id: i64) -> Result<bool> {
        self.delete_setoran_impl(id).await
    }

    async fn list_active_setoran_by_santri(&self, santri_id: i64) -> Result<Vec<Setoran>> {
        self.list_active_setoran_by_santri_impl(santri_id).await
    }

    async fn list_all_active_setoran(&self) -> Result<Vec<Setoran>> {
        self.list_all_active_setoran_impl().await
    }

    // archival module
    async fn list_pending_setoran(&self, cutoff: NaiveDate) -> Result<Vec<Setoran>> {
        self.list_pending_setoran_impl(cutoff).await
    }

    async fn count_pending_setoran(&self, cutoff: NaiveDate) -> Result<u64> {
        self.count_pending_setoran_impl(cutoff).await
    }

    async fn mark_setoran_archived(
        &self,
        ids: &[i64],
        archived_at: DateTime<Utc>,
    ) -> Result<u64> {
        self.mark_setoran_archived_impl(ids, archived_at).await
    }

    async fn create_archive(&self, record: CreateArchiveRecord) -> Result<SetoranArchive> {
        self.create_archive_impl(record).await
    }

    async fn latest_archive(&self) -> Result<Option<SetoranArchive>> {
        self.latest_archive_impl().await
    }

    async fn list_archives_with_pagination(
        &self,
        page: i64,
        size: i64,
    ) -> Result<ArchiveListResponse> {
        self.list_archives_with_pagination_impl(page, size).await
    }
}
