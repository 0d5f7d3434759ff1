use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::setoran::requests::{CreateSetoranRequest, SetoranListParams};
use crate::services::SetoranService;

static SETORAN_SERVICE: Lazy<SetoranService> = Lazy::new(SetoranService::new_lazy);

pub async fn list_setoran(
    req: HttpRequest,
    query: web::Query<SetoranListParams>,
) -> ActixResult<HttpResponse> {
    SETORAN_SERVICE.list_setoran(&req, query.into_inner()).await
}

pub async fn create_setoran(
    req: HttpRequest,
    setoran_data: web::Json<CreateSetoranRequest>,
) -> ActixResult<HttpResponse> {
    SETORAN_SERVICE
        .create_setoran(&req, setoran_data.into_inner())
        .await
}

pub async fn delete_setoran(
    req: HttpRequest,
    setoran_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SETORAN_SERVICE
        .delete_setoran(&req, setoran_id.into_inner())
        .await
}

pub fn configure_setoran_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/setoran")
            .service(
                web::resource("")
                    .route(web::get().to(list_setoran))
                    .route(web::post().to(create_setoran)),
            )
            .service(web::resource("/{setoran_id}").route(web::delete().to(delete_setoran))),
    );
}
