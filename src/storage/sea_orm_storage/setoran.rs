//! Setoran storage operations

use super::SeaOrmStorage;
use crate::entity::setoran::{ActiveModel, Column, Entity as SetoranEntity};
use crate::errors::{Result, TahfidzError};
use crate::models::{
    PaginationInfo, normalize_page_params,
    setoran::{
        entities::Setoran,
        requests::{CreateSetoranRequest, SetoranListQuery},
        responses::SetoranListResponse,
    },
};
use crate::utils::time::date_to_epoch;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// Record an exam entry
    pub async fn create_setoran_impl(&self, req: CreateSetoranRequest) -> Result<Setoran> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            santri_id: Set(req.santri_id),
            tanggal: Set(date_to_epoch(req.tanggal)),
            juz: Set(req.juz),
            surat: Set(req.surat),
            awal_ayat: Set(req.awal_ayat),
            akhir_ayat: Set(req.akhir_ayat),
            kelancaran: Set(req.kelancaran),
            tajwid: Set(req.tajwid),
            tahsin: Set(req.tahsin),
            catatan: Set(req.catatan),
            diuji_oleh: Set(req.diuji_oleh),
            created_at: Set(now),
            archived_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("create setoran failed: {e}")))?;

        Ok(result.into_setoran())
    }

    /// Fetch a setoran by id
    pub async fn get_setoran_by_id_impl(&self, id: i64) -> Result<Option<Setoran>> {
        let result = SetoranEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("query setoran failed: {e}")))?;

        Ok(result.map(|m| m.into_setoran()))
    }

    /// List setoran (paginated; archived rows hidden unless asked for)
    pub async fn list_setoran_with_pagination_impl(
        &self,
        query: SetoranListQuery,
    ) -> Result<SetoranListResponse> {
        let (page, size) = normalize_page_params(query.page, query.size);
        let (page, size) = (page as u64, size as u64);

        let mut select = SetoranEntity::find();

        if !query.include_archived {
            select = select.filter(Column::ArchivedAt.is_null());
        }

        if let Some(santri_id) = query.santri_id {
            select = select.filter(Column::SantriId.eq(santri_id));
        }

        if let Some(juz) = query.juz {
            select = select.filter(Column::Juz.eq(juz));
        }

        select = select
            .order_by_desc(Column::Tanggal)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TahfidzError::database_operation(format!("count setoran failed: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            TahfidzError::database_operation(format!("count setoran pages failed: {e}"))
        })?;
        let items = paginator.fetch_page(page - 1).await.map_err(|e| {
            TahfidzError::database_operation(format!("list setoran failed: {e}"))
        })?;

        Ok(SetoranListResponse {
            items: items.into_iter().map(|m| m.into_setoran()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Delete a setoran
    pub async fn delete_setoran_impl(&self, id: i64) -> Result<bool> {
        let result = SetoranEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("delete setoran failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// Active rows of one santri, total maintainer input
    pub async fn list_active_setoran_by_santri_impl(
        &self,
        santri_id: i64,
    ) -> Result<Vec<Setoran>> {
        let results = SetoranEntity::find()
            .filter(Column::SantriId.eq(santri_id))
            .filter(Column::ArchivedAt.is_null())
            .order_by_asc(Column::Tanggal)
            .all(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("list setoran failed: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_setoran()).collect())
    }

    /// All active rows, performers ranking input
    pub async fn list_all_active_setoran_impl(&self) -> Result<Vec<Setoran>> {
        let results = SetoranEntity::find()
            .filter(Column::ArchivedAt.is_null())
            .order_by_asc(Column::SantriId)
            .all(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("list setoran failed: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_setoran()).collect())
    }
}
