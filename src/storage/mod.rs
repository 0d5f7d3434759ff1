use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    archives::{
        entities::{CreateArchiveRecord, SetoranArchive},
        responses::ArchiveListResponse,
    },
    santri::{
        entities::{JenisKelamin, Santri},
        requests::{CreateSantriRequest, SantriListQuery, UpdateSantriRequest},
        responses::SantriListResponse,
    },
    setoran::{
        entities::Setoran,
        requests::{CreateSetoranRequest, SetoranListQuery},
        responses::SetoranListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Santri management
    // enroll a santri
    async fn create_santri(&self, santri: CreateSantriRequest) -> Result<Santri>;
    // fetch a santri by id
    async fn get_santri_by_id(&self, id: i64) -> Result<Option<Santri>>;
    // list santri
    async fn list_santri_with_pagination(&self, query: SantriListQuery)
    -> Result<SantriListResponse>;
    // all santri, optionally gender-filtered (used by the ranking engine)
    async fn list_all_santri(&self, jenis_kelamin: Option<JenisKelamin>) -> Result<Vec<Santri>>;
    // update santri fields
    async fn update_santri(&self, id: i64, update: UpdateSantriRequest)
    -> Result<Option<Santri>>;
    // remove a santri (setoran rows cascade)
    async fn delete_santri(&self, id: i64) -> Result<bool>;
    // class promotion: kelas += 1 for everyone below the final grade
    async fn promote_all_kelas(&self) -> Result<u64>;
    // write the cached cumulative verse count
    async fn set_total_hafalan(&self, santri_id: i64, total: i32) -> Result<bool>;

    /// Setoran management
    // record an exam entry
    async fn create_setoran(&self, setoran: CreateSetoranRequest) -> Result<Setoran>;
    // fetch a setoran by id
    async fn get_setoran_by_id(&self, id: i64) -> Result<Option<Setoran>>;
    // list setoran
    async fn list_setoran_with_pagination(
        &self,
        query: SetoranListQuery,
    ) -> Result<SetoranListResponse>;
    // delete a setoran
    async fn delete_setoran(&self, id: i64) -> Result<bool>;
    // active (unarchived) setoran of one santri, for the total maintainer
    async fn list_active_setoran_by_santri(&self, santri_id: i64) -> Result<Vec<Setoran>>;
    // all active setoran, for the performers ranking
    async fn list_all_active_setoran(&self) -> Result<Vec<Setoran>>;

    /// Archival workflow
    // active setoran with tanggal strictly before the cutoff
    async fn list_pending_setoran(&self, cutoff: NaiveDate) -> Result<Vec<Setoran>>;
    // count of the above, computed fresh
    async fn count_pending_setoran(&self, cutoff: NaiveDate) -> Result<u64>;
    // stamp archived_at on a migrated batch
    async fn mark_setoran_archived(&self, ids: &[i64], archived_at: DateTime<Utc>)
    -> Result<u64>;
    // persist a manifest row
    async fn create_archive(&self, record: CreateArchiveRecord) -> Result<SetoranArchive>;
    // most recent manifest
    async fn latest_archive(&self) -> Result<Option<SetoranArchive>>;
    // list manifests
    async fn list_archives_with_pagination(
        &self,
        page: i64,
        size: i64,
    ) -> Result<ArchiveListResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

#[cfg(test)]
pub mod memory;
