pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod promote;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::santri::requests::{CreateSantriRequest, SantriListParams, UpdateSantriRequest};
use crate::storage::Storage;

pub struct SantriService {
    storage: Option<Arc<dyn Storage>>,
}

impl SantriService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_santri(
        &self,
        request: &HttpRequest,
        params: SantriListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_santri(self, request, params).await
    }

    pub async fn create_santri(
        &self,
        request: &HttpRequest,
        santri_data: CreateSantriRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_santri(self, request, santri_data).await
    }

    pub async fn get_santri(
        &self,
        request: &HttpRequest,
        santri_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_santri(self, request, santri_id).await
    }

    pub async fn update_santri(
        &self,
        request: &HttpRequest,
        santri_id: i64,
        update_data: UpdateSantriRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_santri(self, request, santri_id, update_data).await
    }

    pub async fn delete_santri(
        &self,
        request: &HttpRequest,
        santri_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_santri(self, request, santri_id).await
    }

    // yearly class promotion, everyone below the final grade moves up
    pub async fn promote_kelas(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        promote::promote_kelas(self, request).await
    }
}
