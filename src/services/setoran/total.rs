//! Hafalan total maintenance
//!
//! `santri.total_hafalan` is a cache of the verse counts of the santri's
//! active setoran. It is recomputed from scratch after every create and
//! delete rather than adjusted incrementally, so a missed update can never
//! compound. Archived rows keep contributing through the stored value:
//! recomputation only runs on mutation, and archival is not a mutation of
//! the santri.

use std::sync::Arc;

use crate::errors::Result;
use crate::models::setoran::entities::Setoran;
use crate::storage::Storage;

/// Verse total over a set of setoran.
pub fn sum_ayat(setoran: &[Setoran]) -> i32 {
    setoran.iter().map(|s| s.ayat_count()).sum()
}

/// Recompute and persist one santri's total from their active rows.
/// Returns the stored value.
pub async fn update_total_hafalan(storage: &Arc<dyn Storage>, santri_id: i64) -> Result<i32> {
    let active = storage.list_active_setoran_by_santri(santri_id).await?;
    let total = sum_ayat(&active);
    storage.set_total_hafalan(santri_id, total).await?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::santri::entities::JenisKelamin;
    use crate::models::santri::requests::CreateSantriRequest;
    use crate::models::setoran::requests::CreateSetoranRequest;
    use crate::storage::memory::MemoryStorage;

    fn setoran_req(santri_id: i64, awal: i32, akhir: i32) -> CreateSetoranRequest {
        CreateSetoranRequest {
            santri_id,
            tanggal: chrono::NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            juz: 1,
            surat: "Al-Baqarah".to_string(),
            awal_ayat: awal,
            akhir_ayat: akhir,
            kelancaran: 5,
            tajwid: 4,
            tahsin: 5,
            catatan: None,
            diuji_oleh: "Ust. Ahmad".to_string(),
        }
    }

    async fn enrolled(storage: &Arc<dyn Storage>) -> i64 {
        storage
            .create_santri(CreateSantriRequest {
                nama: "Hasan".to_string(),
                kelas: 7,
                jenis_kelamin: JenisKelamin::Ikhwan,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_total_is_sum_of_active_ranges() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let id = enrolled(&storage).await;

        storage.create_setoran(setoran_req(id, 1, 10)).await.unwrap();
        storage.create_setoran(setoran_req(id, 11, 20)).await.unwrap();
        storage.create_setoran(setoran_req(id, 21, 25)).await.unwrap();

        let total = update_total_hafalan(&storage, id).await.unwrap();
        assert_eq!(total, 25);
        assert_eq!(
            storage.get_santri_by_id(id).await.unwrap().unwrap().total_hafalan,
            25
        );
    }

    #[tokio::test]
    async fn test_recompute_is_idempotent() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let id = enrolled(&storage).await;
        storage.create_setoran(setoran_req(id, 1, 7)).await.unwrap();

        let first = update_total_hafalan(&storage, id).await.unwrap();
        let second = update_total_hafalan(&storage, id).await.unwrap();
        assert_eq!(first, 7);
        assert_eq!(second, 7);
    }

    #[tokio::test]
    async fn test_delete_then_recompute_drops_contribution() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let id = enrolled(&storage).await;

        let kept = storage.create_setoran(setoran_req(id, 1, 10)).await.unwrap();
        let gone = storage.create_setoran(setoran_req(id, 11, 30)).await.unwrap();
        update_total_hafalan(&storage, id).await.unwrap();

        storage.delete_setoran(gone.id).await.unwrap();
        let total = update_total_hafalan(&storage, id).await.unwrap();

        assert_eq!(total, kept.ayat_count());
    }

    #[test]
    fn test_sum_ayat_empty() {
        assert_eq!(sum_ayat(&[]), 0);
    }
}
