//! Migration core and POST /migrate handler
//!
//! `execute_migration` is independent of HTTP so the background sweeper and
//! the route share it. Step order matters: export, then manifest, then mark.
//! A crash between manifest and mark leaves rows re-selectable, so archival
//! is at-least-once, never at-most-once.

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use tracing::{error, info, warn};

use super::ArchiveService;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::archives::entities::{CreateArchiveRecord, SetoranArchive};
use crate::models::archives::requests::RunMigrationRequest;
use crate::models::archives::responses::MigrationResultResponse;
use crate::models::setoran::entities::Setoran;
use crate::models::{ApiResponse, ErrorCode};
use crate::sheets::SheetsExporter;
use crate::storage::Storage;

/// Export column order, shared by the Sheets path and the CSV download.
pub const EXPORT_HEADER: [&str; 13] = [
    "id",
    "santri_id",
    "tanggal",
    "surat",
    "juz",
    "awal_ayat",
    "akhir_ayat",
    "kelancaran",
    "tajwid",
    "tahsin",
    "diuji_oleh",
    "catatan",
    "created_at",
];

// a run within this window of the previous one needs force
const RERUN_GUARD_HOURS: i64 = 24;

#[derive(Debug)]
pub enum MigrationOutcome {
    NothingToArchive,
    Archived {
        archive: SetoranArchive,
        records_processed: u64,
    },
}

/// `setoran_{startYear}_{startMonth}_to_{endYear}_{endMonth}`, months unpadded.
pub fn archive_name(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "setoran_{}_{}_to_{}_{}",
        start.year(),
        start.month(),
        end.year(),
        end.month()
    )
}

/// Rows dated strictly before this are eligible for archival.
pub fn cutoff_date(now: DateTime<Utc>, retention_months: u32) -> NaiveDate {
    now.date_naive()
        .checked_sub_months(Months::new(retention_months))
        .unwrap_or(NaiveDate::MIN)
}

pub fn setoran_row(s: &Setoran) -> Vec<String> {
    vec![
        s.id.to_string(),
        s.santri_id.to_string(),
        s.tanggal.to_string(),
        s.surat.clone(),
        s.juz.to_string(),
        s.awal_ayat.to_string(),
        s.akhir_ayat.to_string(),
        s.kelancaran.to_string(),
        s.tajwid.to_string(),
        s.tahsin.to_string(),
        s.diuji_oleh.clone(),
        s.catatan.clone().unwrap_or_default(),
        s.created_at.to_rfc3339(),
    ]
}

/// Scan, name, export, write the manifest, mark the rows.
pub async fn execute_migration(
    storage: &Arc<dyn Storage>,
    exporter: &Arc<dyn SheetsExporter>,
    cutoff: NaiveDate,
    now: DateTime<Utc>,
) -> Result<MigrationOutcome> {
    let pending = storage.list_pending_setoran(cutoff).await?;
    if pending.is_empty() {
        return Ok(MigrationOutcome::NothingToArchive);
    }

    // pending is ordered by tanggal, but don't depend on it
    let period_start = pending.iter().map(|s| s.tanggal).min().unwrap_or(cutoff);
    let period_end = pending.iter().map(|s| s.tanggal).max().unwrap_or(cutoff);
    let name = archive_name(period_start, period_end);

    let header = EXPORT_HEADER.iter().map(|h| h.to_string()).collect();
    let rows = pending.iter().map(setoran_row).collect();

    // any export failure aborts here: no manifest, rows stay pending
    let handle = exporter.export(&name, header, rows).await?;

    let archive = storage
        .create_archive(CreateArchiveRecord {
            archive_name: name,
            google_sheet_id: handle.spreadsheet_id,
            google_sheet_url: handle.spreadsheet_url,
            period_start,
            period_end,
            total_records: pending.len() as i32,
        })
        .await?;

    let ids: Vec<i64> = pending.iter().map(|s| s.id).collect();
    let marked = storage.mark_setoran_archived(&ids, now).await?;

    info!(
        "Archived {} setoran ({} marked) into {}",
        pending.len(),
        marked,
        archive.archive_name
    );

    Ok(MigrationOutcome::Archived {
        archive,
        records_processed: pending.len() as u64,
    })
}

pub async fn run_migration(
    service: &ArchiveService,
    request: &HttpRequest,
    body: RunMigrationRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let storage = service.get_storage(request);

    let Some(exporter) = service.get_exporter(request) else {
        return Ok(
            HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                ErrorCode::CredentialError,
                "Automated export is not configured; use the CSV export and confirm endpoints",
            )),
        );
    };

    let now = Utc::now();

    // a second migrate right after the first is usually a double submit
    if !body.force {
        match storage.latest_archive().await {
            Ok(Some(latest))
                if now.signed_duration_since(latest.created_at).num_hours()
                    < RERUN_GUARD_HOURS =>
            {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    format!(
                        "Archive {} was created less than {RERUN_GUARD_HOURS}h ago; pass force to run anyway",
                        latest.archive_name
                    ),
                )));
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read latest archive: {}", e);
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Migration failed",
                    ),
                ));
            }
        }
    }

    let cutoff = cutoff_date(now, config.archive.retention_months);

    match execute_migration(&storage, &exporter, cutoff, now).await {
        Ok(MigrationOutcome::NothingToArchive) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MigrationResultResponse {
                    message: "No setoran older than the cutoff".to_string(),
                    records_processed: 0,
                    archive_name: None,
                    sheet_url: None,
                    archive_id: None,
                },
                "Nothing to archive",
            )))
        }
        Ok(MigrationOutcome::Archived {
            archive,
            records_processed,
        }) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MigrationResultResponse {
                message: format!("Archived {records_processed} setoran"),
                records_processed,
                archive_name: Some(archive.archive_name),
                sheet_url: Some(archive.google_sheet_url),
                archive_id: Some(archive.id),
            },
            "Migration completed",
        ))),
        Err(e) => {
            warn!("Migration run failed: {}", e);
            Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::SheetsApiError,
                format!("Migration failed: {}", e.message()),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TahfidzError;
    use crate::models::santri::entities::JenisKelamin;
    use crate::models::santri::requests::CreateSantriRequest;
    use crate::models::setoran::requests::CreateSetoranRequest;
    use crate::sheets::SheetHandle;
    use crate::storage::memory::MemoryStorage;
    use std::sync::Mutex;

    struct FakeSheets {
        fail: bool,
        exports: Mutex<Vec<(String, usize)>>,
    }

    impl FakeSheets {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                exports: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl SheetsExporter for FakeSheets {
        async fn export(
            &self,
            title: &str,
            _header: Vec<String>,
            rows: Vec<Vec<String>>,
        ) -> Result<SheetHandle> {
            if self.fail {
                return Err(TahfidzError::sheets_api("simulated outage"));
            }
            self.exports
                .lock()
                .unwrap()
                .push((title.to_string(), rows.len()));
            Ok(SheetHandle {
                spreadsheet_id: "sheet-1".to_string(),
                spreadsheet_url: "https://sheets.example/sheet-1".to_string(),
            })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seeded_storage(dates: &[NaiveDate]) -> Arc<dyn Storage> {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let santri = storage
            .create_santri(CreateSantriRequest {
                nama: "Fatimah".to_string(),
                kelas: 9,
                jenis_kelamin: JenisKelamin::Akhwat,
            })
            .await
            .unwrap();
        for tanggal in dates {
            storage
                .create_setoran(CreateSetoranRequest {
                    santri_id: santri.id,
                    tanggal: *tanggal,
                    juz: 1,
                    surat: "Al-Baqarah".to_string(),
                    awal_ayat: 1,
                    akhir_ayat: 5,
                    kelancaran: 5,
                    tajwid: 5,
                    tahsin: 5,
                    catatan: None,
                    diuji_oleh: "Ust. Salim".to_string(),
                })
                .await
                .unwrap();
        }
        storage
    }

    #[test]
    fn test_archive_name_is_unpadded() {
        assert_eq!(
            archive_name(date(2025, 1, 15), date(2025, 3, 2)),
            "setoran_2025_1_to_2025_3"
        );
        assert_eq!(
            archive_name(date(2024, 11, 1), date(2025, 2, 28)),
            "setoran_2024_11_to_2025_2"
        );
    }

    #[test]
    fn test_cutoff_is_retention_months_back() {
        let now = date(2025, 5, 15).and_hms_opt(8, 0, 0).unwrap().and_utc();
        assert_eq!(cutoff_date(now, 2), date(2025, 3, 15));
    }

    #[tokio::test]
    async fn test_no_op_when_nothing_is_old_enough() {
        let storage = seeded_storage(&[date(2025, 5, 1)]).await;
        let exporter: Arc<dyn SheetsExporter> = Arc::new(FakeSheets::new(false));

        let outcome =
            execute_migration(&storage, &exporter, date(2025, 3, 1), Utc::now())
                .await
                .unwrap();

        assert!(matches!(outcome, MigrationOutcome::NothingToArchive));
        assert!(storage.latest_archive().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_manifest_period_spans_the_batch() {
        let storage = seeded_storage(&[
            date(2025, 1, 20),
            date(2024, 12, 5),
            date(2025, 2, 10),
            date(2025, 4, 25), // stays pending
        ])
        .await;
        let fake = Arc::new(FakeSheets::new(false));
        let exporter: Arc<dyn SheetsExporter> = fake.clone();
        let now = Utc::now();

        let outcome = execute_migration(&storage, &exporter, date(2025, 3, 1), now)
            .await
            .unwrap();

        let MigrationOutcome::Archived {
            archive,
            records_processed,
        } = outcome
        else {
            panic!("expected an archive");
        };
        assert_eq!(records_processed, 3);
        assert_eq!(archive.period_start, date(2024, 12, 5));
        assert_eq!(archive.period_end, date(2025, 2, 10));
        assert_eq!(archive.archive_name, "setoran_2024_12_to_2025_2");
        assert_eq!(archive.total_records, 3);

        // every archived row is stamped, the recent one stays pending
        assert_eq!(storage.count_pending_setoran(date(2025, 3, 1)).await.unwrap(), 0);
        assert_eq!(
            storage
                .count_pending_setoran(date(2025, 12, 31))
                .await
                .unwrap(),
            1
        );

        let exports = fake.exports.lock().unwrap();
        assert_eq!(*exports, vec![("setoran_2024_12_to_2025_2".to_string(), 3)]);
    }

    #[tokio::test]
    async fn test_export_failure_leaves_rows_pending_and_no_manifest() {
        let storage = seeded_storage(&[date(2025, 1, 1), date(2025, 1, 2)]).await;
        let exporter: Arc<dyn SheetsExporter> = Arc::new(FakeSheets::new(true));

        let result =
            execute_migration(&storage, &exporter, date(2025, 3, 1), Utc::now()).await;

        assert!(result.is_err());
        assert!(storage.latest_archive().await.unwrap().is_none());
        assert_eq!(
            storage.count_pending_setoran(date(2025, 3, 1)).await.unwrap(),
            2
        );
    }

    #[test]
    fn test_setoran_row_matches_header_width() {
        let s = Setoran {
            id: 9,
            santri_id: 3,
            tanggal: date(2025, 1, 1),
            juz: 2,
            surat: "Ali 'Imran".to_string(),
            awal_ayat: 1,
            akhir_ayat: 20,
            kelancaran: 4,
            tajwid: 4,
            tahsin: 5,
            catatan: Some("lancar".to_string()),
            diuji_oleh: "Ust. Salim".to_string(),
            created_at: Utc::now(),
            archived_at: None,
        };
        assert_eq!(setoran_row(&s).len(), EXPORT_HEADER.len());
    }
}
