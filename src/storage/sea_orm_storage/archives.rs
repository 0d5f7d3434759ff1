//! Archival workflow storage operations

use super::SeaOrmStorage;
use crate::entity::setoran::{Column as SetoranColumn, Entity as SetoranEntity};
use crate::entity::setoran_archives::{
    ActiveModel as ArchiveActiveModel, Column as ArchiveColumn, Entity as ArchiveEntity,
};
use crate::errors::{Result, TahfidzError};
use crate::models::{
    PaginationInfo, normalize_page_params,
    archives::{
        entities::{CreateArchiveRecord, SetoranArchive},
        responses::ArchiveListResponse,
    },
    setoran::entities::Setoran,
};
use crate::utils::time::date_to_epoch;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// Active setoran dated strictly before the cutoff, oldest first
    pub async fn list_pending_setoran_impl(&self, cutoff: NaiveDate) -> Result<Vec<Setoran>> {
        let results = SetoranEntity::find()
            .filter(SetoranColumn::ArchivedAt.is_null())
            .filter(SetoranColumn::Tanggal.lt(date_to_epoch(cutoff)))
            .order_by_asc(SetoranColumn::Tanggal)
            .order_by_asc(SetoranColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                TahfidzError::database_operation(format!("list pending setoran failed: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_setoran()).collect())
    }

    /// Pending count, computed fresh on every call
    pub async fn count_pending_setoran_impl(&self, cutoff: NaiveDate) -> Result<u64> {
        SetoranEntity::find()
            .filter(SetoranColumn::ArchivedAt.is_null())
            .filter(SetoranColumn::Tanggal.lt(date_to_epoch(cutoff)))
            .count(&self.db)
            .await
            .map_err(|e| {
                TahfidzError::database_operation(format!("count pending setoran failed: {e}"))
            })
    }

    /// Stamp archived_at on a migrated batch
    pub async fn mark_setoran_archived_impl(
        &self,
        ids: &[i64],
        archived_at: DateTime<Utc>,
    ) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = SetoranEntity::update_many()
            .col_expr(
                SetoranColumn::ArchivedAt,
                sea_orm::sea_query::Expr::value(archived_at.timestamp()),
            )
            .filter(SetoranColumn::Id.is_in(ids.to_vec()))
            .filter(SetoranColumn::ArchivedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| {
                TahfidzError::database_operation(format!("mark setoran archived failed: {e}"))
            })?;

        Ok(result.rows_affected)
    }

    /// Persist a manifest row
    pub async fn create_archive_impl(&self, record: CreateArchiveRecord) -> Result<SetoranArchive> {
        let now = chrono::Utc::now().timestamp();

        let model = ArchiveActiveModel {
            archive_name: Set(record.archive_name),
            google_sheet_id: Set(record.google_sheet_id),
            google_sheet_url: Set(record.google_sheet_url),
            period_start: Set(date_to_epoch(record.period_start)),
            period_end: Set(date_to_epoch(record.period_end)),
            total_records: Set(record.total_records),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("create archive failed: {e}")))?;

        Ok(result.into_archive())
    }

    /// Most recent manifest
    pub async fn latest_archive_impl(&self) -> Result<Option<SetoranArchive>> {
        let result = ArchiveEntity::find()
            .order_by_desc(ArchiveColumn::CreatedAt)
            .order_by_desc(ArchiveColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("query archive failed: {e}")))?;

        Ok(result.map(|m| m.into_archive()))
    }

    /// List manifests, newest first
    pub async fn list_archives_with_pagination_impl(
        &self,
        page: i64,
        size: i64,
    ) -> Result<ArchiveListResponse> {
        let (page, size) = normalize_page_params(Some(page), Some(size));
        let (page, size) = (page as u64, size as u64);

        let paginator = ArchiveEntity::find()
            .order_by_desc(ArchiveColumn::CreatedAt)
            .order_by_desc(ArchiveColumn::Id)
            .paginate(&self.db, size);

        let total = paginator.num_items().await.map_err(|e| {
            TahfidzError::database_operation(format!("count archives failed: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            TahfidzError::database_operation(format!("count archive pages failed: {e}"))
        })?;
        let items = paginator.fetch_page(page - 1).await.map_err(|e| {
            TahfidzError::database_operation(format!("list archives failed: {e}"))
        })?;

        Ok(ArchiveListResponse {
            items: items.into_iter().map(|m| m.into_archive()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
