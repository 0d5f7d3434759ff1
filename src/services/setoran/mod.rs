pub mod create;
pub mod delete;
pub mod list;
pub mod total;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::setoran::requests::{CreateSetoranRequest, SetoranListParams};
use crate::storage::Storage;

pub struct SetoranService {
    storage: Option<Arc<dyn Storage>>,
}

impl SetoranService {
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

    pub async fn list_setoran(
        &self,
        request: &HttpRequest,
        params: SetoranListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_setoran(self, request, params).await
    }

    // exam entry; also refreshes the santri's cached total
    pub async fn create_setoran(
        &self,
        request: &HttpRequest,
        setoran_data: CreateSetoranRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_setoran(self, request, setoran_data).await
    }

    // deletion; also refreshes the santri's cached total
    pub async fn delete_setoran(
        &self,
        request: &HttpRequest,
        setoran_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_setoran(self, request, setoran_id).await
    }
}
