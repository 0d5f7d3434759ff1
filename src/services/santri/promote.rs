use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SantriService;
use crate::models::santri::responses::PromoteKelasResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn promote_kelas(
    service: &SantriService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.promote_all_kelas().await {
        Ok(promoted) => {
            info!("Class promotion moved {} santri up one kelas", promoted);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PromoteKelasResponse { promoted },
                "Class promotion completed",
            )))
        }
        Err(e) => {
            error!("Class promotion failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Class promotion failed",
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::models::santri::entities::JenisKelamin;
    use crate::models::santri::requests::CreateSantriRequest;
    use crate::storage::Storage;
    use crate::storage::memory::MemoryStorage;
    use crate::utils::validate::KELAS_MAX;

    async fn enroll(storage: &Arc<dyn Storage>, nama: &str, kelas: i32) -> i64 {
        storage
            .create_santri(CreateSantriRequest {
                nama: nama.to_string(),
                kelas,
                jenis_kelamin: JenisKelamin::Ikhwan,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_promotion_stops_at_final_kelas() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let junior = enroll(&storage, "Umar", 7).await;
        let senior = enroll(&storage, "Zaid", KELAS_MAX).await;

        let promoted = storage.promote_all_kelas().await.unwrap();

        assert_eq!(promoted, 1);
        assert_eq!(storage.get_santri_by_id(junior).await.unwrap().unwrap().kelas, 8);
        assert_eq!(
            storage.get_santri_by_id(senior).await.unwrap().unwrap().kelas,
            KELAS_MAX
        );
    }
}
