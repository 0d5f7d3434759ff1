//! In-memory storage double for service and workflow tests.

use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::Result;
use crate::models::{
    PaginationInfo, normalize_page_params,
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
use crate::storage::Storage;
use crate::utils::validate::KELAS_MAX;

#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    santri: Vec<Santri>,
    setoran: Vec<Setoran>,
    archives: Vec<SetoranArchive>,
    next_santri_id: i64,
    next_setoran_id: i64,
    next_archive_id: i64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn page_info(page: i64, size: i64, total: i64) -> PaginationInfo {
        PaginationInfo {
            page,
            page_size: size,
            total,
            total_pages: if total == 0 { 0 } else { (total + size - 1) / size },
        }
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn create_santri(&self, req: CreateSantriRequest) -> Result<Santri> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_santri_id += 1;
        let santri = Santri {
            id: inner.next_santri_id,
            nama: req.nama,
            kelas: req.kelas,
            jenis_kelamin: req.jenis_kelamin,
            total_hafalan: 0,
            created_at: Utc::now(),
        };
        inner.santri.push(santri.clone());
        Ok(santri)
    }

    async fn get_santri_by_id(&self, id: i64) -> Result<Option<Santri>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.santri.iter().find(|s| s.id == id).cloned())
    }

    async fn list_santri_with_pagination(
        &self,
        query: SantriListQuery,
    ) -> Result<SantriListResponse> {
        let inner = self.inner.lock().unwrap();
        let (page, size) = normalize_page_params(query.page, query.size);

        let mut items: Vec<Santri> = inner
            .santri
            .iter()
            .filter(|s| query.jenis_kelamin.is_none_or(|jk| s.jenis_kelamin == jk))
            .filter(|s| query.kelas.is_none_or(|k| s.kelas == k))
            .filter(|s| {
                query
                    .search
                    .as_ref()
                    .is_none_or(|q| s.nama.to_lowercase().contains(&q.to_lowercase()))
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.nama.cmp(&b.nama));

        let total = items.len() as i64;
        let items = items
            .into_iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .collect();

        Ok(SantriListResponse {
            items,
            pagination: Self::page_info(page, size, total),
        })
    }

    async fn list_all_santri(&self, jenis_kelamin: Option<JenisKelamin>) -> Result<Vec<Santri>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .santri
            .iter()
            .filter(|s| jenis_kelamin.is_none_or(|jk| s.jenis_kelamin == jk))
            .cloned()
            .collect())
    }

    async fn update_santri(
        &self,
        id: i64,
        update: UpdateSantriRequest,
    ) -> Result<Option<Santri>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(santri) = inner.santri.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(nama) = update.nama {
            santri.nama = nama;
        }
        if let Some(kelas) = update.kelas {
            santri.kelas = kelas;
        }
        if let Some(jenis_kelamin) = update.jenis_kelamin {
            santri.jenis_kelamin = jenis_kelamin;
        }
        Ok(Some(santri.clone()))
    }

    async fn delete_santri(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.santri.len();
        inner.santri.retain(|s| s.id != id);
        let removed = inner.santri.len() < before;
        if removed {
            // cascade, mirroring the FK
            inner.setoran.retain(|s| s.santri_id != id);
        }
        Ok(removed)
    }

    async fn promote_all_kelas(&self) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let mut promoted = 0;
        for santri in inner.santri.iter_mut() {
            if santri.kelas < KELAS_MAX {
                santri.kelas += 1;
                promoted += 1;
            }
        }
        Ok(promoted)
    }

    async fn set_total_hafalan(&self, santri_id: i64, total: i32) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let Some(santri) = inner.santri.iter_mut().find(|s| s.id == santri_id) else {
            return Ok(false);
        };
        santri.total_hafalan = total;
        Ok(true)
    }

    async fn create_setoran(&self, req: CreateSetoranRequest) -> Result<Setoran> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_setoran_id += 1;
        let setoran = Setoran {
            id: inner.next_setoran_id,
            santri_id: req.santri_id,
            tanggal: req.tanggal,
            juz: req.juz,
            surat: req.surat,
            awal_ayat: req.awal_ayat,
            akhir_ayat: req.akhir_ayat,
            kelancaran: req.kelancaran,
            tajwid: req.tajwid,
            tahsin: req.tahsin,
            catatan: req.catatan,
            diuji_oleh: req.diuji_oleh,
            created_at: Utc::now(),
            archived_at: None,
        };
        inner.setoran.push(setoran.clone());
        Ok(setoran)
    }

    async fn get_setoran_by_id(&self, id: i64) -> Result<Option<Setoran>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.setoran.iter().find(|s| s.id == id).cloned())
    }

    async fn list_setoran_with_pagination(
        &self,
        query: SetoranListQuery,
    ) -> Result<SetoranListResponse> {
        let inner = self.inner.lock().unwrap();
        let (page, size) = normalize_page_params(query.page, query.size);

        let mut items: Vec<Setoran> = inner
            .setoran
            .iter()
            .filter(|s| query.include_archived || s.is_active())
            .filter(|s| query.santri_id.is_none_or(|id| s.santri_id == id))
            .filter(|s| query.juz.is_none_or(|j| s.juz == j))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.tanggal.cmp(&a.tanggal).then(b.id.cmp(&a.id)));

        let total = items.len() as i64;
        let items = items
            .into_iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .collect();

        Ok(SetoranListResponse {
            items,
            pagination: Self::page_info(page, size, total),
        })
    }

    async fn delete_setoran(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.setoran.len();
        inner.setoran.retain(|s| s.id != id);
        Ok(inner.setoran.len() < before)
    }

    async fn list_active_setoran_by_santri(&self, santri_id: i64) -> Result<Vec<Setoran>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .setoran
            .iter()
            .filter(|s| s.santri_id == santri_id && s.is_active())
            .cloned()
            .collect())
    }

    async fn list_all_active_setoran(&self) -> Result<Vec<Setoran>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .setoran
            .iter()
            .filter(|s| s.is_active())
            .cloned()
            .collect())
    }

    async fn list_pending_setoran(&self, cutoff: NaiveDate) -> Result<Vec<Setoran>> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<Setoran> = inner
            .setoran
            .iter()
            .filter(|s| s.is_active() && s.tanggal < cutoff)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.tanggal.cmp(&b.tanggal).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn count_pending_setoran(&self, cutoff: NaiveDate) -> Result<u64> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .setoran
            .iter()
            .filter(|s| s.is_active() && s.tanggal < cutoff)
            .count() as u64)
    }

    async fn mark_setoran_archived(
        &self,
        ids: &[i64],
        archived_at: DateTime<Utc>,
    ) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let mut marked = 0;
        for setoran in inner.setoran.iter_mut() {
            if setoran.is_active() && ids.contains(&setoran.id) {
                setoran.archived_at = Some(archived_at);
                marked += 1;
            }
        }
        Ok(marked)
    }

    async fn create_archive(&self, record: CreateArchiveRecord) -> Result<SetoranArchive> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_archive_id += 1;
        let archive = SetoranArchive {
            id: inner.next_archive_id,
            archive_name: record.archive_name,
            google_sheet_id: record.google_sheet_id,
            google_sheet_url: record.google_sheet_url,
            period_start: record.period_start,
            period_end: record.period_end,
            total_records: record.total_records,
            created_at: Utc::now(),
        };
        inner.archives.push(archive.clone());
        Ok(archive)
    }

    async fn latest_archive(&self) -> Result<Option<SetoranArchive>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.archives.last().cloned())
    }

    async fn list_archives_with_pagination(
        &self,
        page: i64,
        size: i64,
    ) -> Result<ArchiveListResponse> {
        let inner = self.inner.lock().unwrap();
        let (page, size) = normalize_page_params(Some(page), Some(size));

        let mut items: Vec<SetoranArchive> = inner.archives.iter().cloned().collect();
        items.reverse();

        let total = items.len() as i64;
        let items = items
            .into_iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .collect();

        Ok(ArchiveListResponse {
            items,
            pagination: Self::page_info(page, size, total),
        })
    }
}
