//! Background archive sweeper
//!
//! Periodically runs the same migration core as POST /migrate. A failed
//! sweep is logged and retried on the next tick; the rows stay pending in
//! the meantime.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::services::archives::run::{MigrationOutcome, cutoff_date, execute_migration};
use crate::sheets::SheetsState;
use crate::storage::Storage;

pub fn spawn_archive_sweeper(storage: Arc<dyn Storage>, sheets: SheetsState) {
    let config = AppConfig::get();

    if !config.archive.auto_sweep {
        info!("Archive auto-sweep disabled");
        return;
    }

    let Some(exporter) = sheets.exporter else {
        warn!("Archive auto-sweep enabled but no Sheets credentials configured; sweeper not started");
        return;
    };

    let interval_hours = config.archive.sweep_interval_hours.max(1);
    let retention_months = config.archive.retention_months;
    info!("Archive sweeper started, interval {} hours", interval_hours);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_hours * 3600));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let now = chrono::Utc::now();
            let cutoff = cutoff_date(now, retention_months);

            match execute_migration(&storage, &exporter, cutoff, now).await {
                Ok(MigrationOutcome::NothingToArchive) => {
                    debug!("Archive sweep: nothing older than {}", cutoff);
                }
                Ok(MigrationOutcome::Archived {
                    archive,
                    records_processed,
                }) => {
                    info!(
                        "Archive sweep stored {} setoran in {}",
                        records_processed, archive.archive_name
                    );
                }
                Err(e) => {
                    warn!("Archive sweep failed, will retry next tick: {}", e);
                }
            }
        }
    });
}
