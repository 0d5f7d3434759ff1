pub mod rankings;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

use crate::models::achievements::requests::AchievementQuery;
use crate::models::achievements::responses::{SantriAchievement, TopPerformer};
use crate::storage::Storage;

// leaderboards change slowly relative to reads, so a short TTL is enough
const CACHE_TTL_SECS: u64 = 30;
const CACHE_CAPACITY: u64 = 16;

pub struct AchievementService {
    storage: Option<Arc<dyn Storage>>,
    achievement_cache: Cache<String, Vec<SantriAchievement>>,
    performer_cache: Cache<String, Vec<TopPerformer>>,
}

impl AchievementService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            achievement_cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(Duration::from_secs(CACHE_TTL_SECS))
                .build(),
            performer_cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(Duration::from_secs(CACHE_TTL_SECS))
                .build(),
        }
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

    pub async fn top_hafalan(
        &self,
        request: &HttpRequest,
        query: AchievementQuery,
    ) -> ActixResult<HttpResponse> {
        rankings::top_hafalan(self, request, query).await
    }

    pub async fn top_performers(
        &self,
        request: &HttpRequest,
        query: AchievementQuery,
    ) -> ActixResult<HttpResponse> {
        rankings::top_performers(self, request, query).await
    }

    pub async fn top_regularity(
        &self,
        request: &HttpRequest,
        query: AchievementQuery,
    ) -> ActixResult<HttpResponse> {
        rankings::top_regularity(self, request, query).await
    }

    pub(crate) fn achievement_cache(&self) -> &Cache<String, Vec<SantriAchievement>> {
        &self.achievement_cache
    }

    pub(crate) fn performer_cache(&self) -> &Cache<String, Vec<TopPerformer>> {
        &self.performer_cache
    }
}
