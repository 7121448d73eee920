use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::materials::requests::{CreateMaterialRequest, UpdateMaterialRequest};
use crate::services::MaterialService;

// 懒加载的全局 MATERIAL_SERVICE 实例
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);

pub async fn list_materials(req: HttpRequest) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.list_materials(&req).await
}

pub async fn create_material(
    req: HttpRequest,
    material_data: web::Json<CreateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .create_material(&req, material_data.into_inner())
        .await
}

pub async fn get_material(
    req: HttpRequest,
    material_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .get_material(&req, material_id.into_inner())
        .await
}

pub async fn update_material(
    req: HttpRequest,
    material_id: web::Path<String>,
    material_data: web::Json<UpdateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .update_material(&req, material_id.into_inner(), material_data.into_inner())
        .await
}

pub async fn delete_material(
    req: HttpRequest,
    material_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .delete_material(&req, material_id.into_inner())
        .await
}

// 配置路由
pub fn configure_materials_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/materials")
            .service(
                web::resource("")
                    .route(web::get().to(list_materials))
                    .route(web::post().to(create_material)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_material))
                    .route(web::put().to(update_material))
                    .route(web::delete().to(delete_material)),
            ),
    );
}
