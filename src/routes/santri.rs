use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::santri::requests::{CreateSantriRequest, SantriListParams, UpdateSantriRequest};
use crate::services::SantriService;

static SANTRI_SERVICE: Lazy<SantriService> = Lazy::new(SantriService::new_lazy);

pub async fn list_santri(
    req: HttpRequest,
    query: web::Query<SantriListParams>,
) -> ActixResult<HttpResponse> {
    SANTRI_SERVICE.list_santri(&req, query.into_inner()).await
}

pub async fn create_santri(
    req: HttpRequest,
    santri_data: web::Json<CreateSantriRequest>,
) -> ActixResult<HttpResponse> {
    SANTRI_SERVICE
        .create_santri(&req, santri_data.into_inner())
        .await
}

pub async fn get_santri(req: HttpRequest, santri_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SANTRI_SERVICE.get_santri(&req, santri_id.into_inner()).await
}

pub async fn update_santri(
    req: HttpRequest,
    santri_id: web::Path<i64>,
    update_data: web::Json<UpdateSantriRequest>,
) -> ActixResult<HttpResponse> {
    SANTRI_SERVICE
        .update_santri(&req, santri_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_santri(
    req: HttpRequest,
    santri_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SANTRI_SERVICE
        .delete_santri(&req, santri_id.into_inner())
        .await
}

pub async fn promote_kelas(req: HttpRequest) -> ActixResult<HttpResponse> {
    SANTRI_SERVICE.promote_kelas(&req).await
}

pub fn configure_santri_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/santri")
            .service(
                web::resource("")
                    .route(web::get().to(list_santri))
                    .route(web::post().to(create_santri)),
            )
            // yearly promotion, admin-triggered
            .service(web::resource("/promote").route(web::post().to(promote_kelas)))
            .service(
                web::resource("/{santri_id}")
                    .route(web::get().to(get_santri))
                    .route(web::put().to(update_santri))
                    .route(web::delete().to(delete_santri)),
            ),
    );
}
