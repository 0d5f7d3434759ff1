//! Santri storage operations

use super::SeaOrmStorage;
use crate::entity::santri::{ActiveModel, Column, Entity as SantriEntity};
use crate::errors::{Result, TahfidzError};
use crate::models::{
    PaginationInfo, normalize_page_params,
    santri::{
        entities::{JenisKelamin, Santri},
        requests::{CreateSantriRequest, SantriListQuery, UpdateSantriRequest},
        responses::SantriListResponse,
    },
};
use crate::utils::contains_pattern;
use crate::utils::validate::KELAS_MAX;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// Enroll a santri
    pub async fn create_santri_impl(&self, req: CreateSantriRequest) -> Result<Santri> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            nama: Set(req.nama),
            kelas: Set(req.kelas),
            jenis_kelamin: Set(req.jenis_kelamin.to_string()),
            total_hafalan: Set(0),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("create santri failed: {e}")))?;

        Ok(result.into_santri())
    }

    /// Fetch a santri by id
    pub async fn get_santri_by_id_impl(&self, id: i64) -> Result<Option<Santri>> {
        let result = SantriEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("query santri failed: {e}")))?;

        Ok(result.map(|m| m.into_santri()))
    }

    /// List santri (paginated, filterable)
    pub async fn list_santri_with_pagination_impl(
        &self,
        query: SantriListQuery,
    ) -> Result<SantriListResponse> {
        let (page, size) = normalize_page_params(query.page, query.size);
        let (page, size) = (page as u64, size as u64);

        let mut select = SantriEntity::find();

        if let Some(jenis_kelamin) = query.jenis_kelamin {
            select = select.filter(Column::JenisKelamin.eq(jenis_kelamin.to_string()));
        }

        if let Some(kelas) = query.kelas {
            select = select.filter(Column::Kelas.eq(kelas));
        }

        if let Some(ref search) = query.search {
            select = select.filter(Column::Nama.like(contains_pattern(search)));
        }

        select = select.order_by_asc(Column::Nama);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TahfidzError::database_operation(format!("count santri failed: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            TahfidzError::database_operation(format!("count santri pages failed: {e}"))
        })?;
        let items = paginator.fetch_page(page - 1).await.map_err(|e| {
            TahfidzError::database_operation(format!("list santri failed: {e}"))
        })?;

        Ok(SantriListResponse {
            items: items.into_iter().map(|m| m.into_santri()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// All santri, optionally gender-filtered (ranking engine input)
    pub async fn list_all_santri_impl(
        &self,
        jenis_kelamin: Option<JenisKelamin>,
    ) -> Result<Vec<Santri>> {
        let mut select = SantriEntity::find();

        if let Some(jenis_kelamin) = jenis_kelamin {
            select = select.filter(Column::JenisKelamin.eq(jenis_kelamin.to_string()));
        }

        let results = select
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("list santri failed: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_santri()).collect())
    }

    /// Update santri fields
    pub async fn update_santri_impl(
        &self,
        id: i64,
        update: UpdateSantriRequest,
    ) -> Result<Option<Santri>> {
        let existing = SantriEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("query santri failed: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(nama) = update.nama {
            model.nama = Set(nama);
        }
        if let Some(kelas) = update.kelas {
            model.kelas = Set(kelas);
        }
        if let Some(jenis_kelamin) = update.jenis_kelamin {
            model.jenis_kelamin = Set(jenis_kelamin.to_string());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("update santri failed: {e}")))?;

        Ok(Some(result.into_santri()))
    }

    /// Remove a santri (setoran rows cascade via FK)
    pub async fn delete_santri_impl(&self, id: i64) -> Result<bool> {
        let result = SantriEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("delete santri failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// Class promotion: everyone below the final grade moves up one
    pub async fn promote_all_kelas_impl(&self) -> Result<u64> {
        // scoped: the blanket trait shadows Ord::max/clamp elsewhere
        use sea_orm::sea_query::ExprTrait as _;

        let result = SantriEntity::update_many()
            .col_expr(
                Column::Kelas,
                sea_orm::sea_query::Expr::col(Column::Kelas).add(1),
            )
            .filter(Column::Kelas.lt(KELAS_MAX))
            .exec(&self.db)
            .await
            .map_err(|e| TahfidzError::database_operation(format!("promote kelas failed: {e}")))?;

        Ok(result.rows_affected)
    }

    /// Write the cached cumulative verse count
    pub async fn set_total_hafalan_impl(&self, santri_id: i64, total: i32) -> Result<bool> {
        let result = SantriEntity::update_many()
            .col_expr(Column::TotalHafalan, sea_orm::sea_query::Expr::value(total))
            .filter(Column::Id.eq(santri_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                TahfidzError::database_operation(format!("update total_hafalan failed: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
