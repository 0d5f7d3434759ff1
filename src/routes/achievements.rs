use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::achievements::requests::AchievementQuery;
use crate::services::AchievementService;

static ACHIEVEMENT_SERVICE: Lazy<AchievementService> = Lazy::new(AchievementService::new_lazy);

pub async fn top_hafalan(
    req: HttpRequest,
    query: web::Query<AchievementQuery>,
) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE
        .top_hafalan(&req, query.into_inner())
        .await
}

pub async fn top_performers(
    req: HttpRequest,
    query: web::Query<AchievementQuery>,
) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE
        .top_performers(&req, query.into_inner())
        .await
}

pub async fn top_regularity(
    req: HttpRequest,
    query: web::Query<AchievementQuery>,
) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE
        .top_regularity(&req, query.into_inner())
        .await
}

pub fn configure_achievement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/achievements")
            .service(web::resource("/hafalan").route(web::get().to(top_hafalan)))
            .service(web::resource("/performers").route(web::get().to(top_performers)))
            .service(web::resource("/regularity").route(web::get().to(top_regularity))),
    );
}
