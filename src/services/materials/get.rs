use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::models::materials::entities::Material;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_materials(
    service: &MaterialService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    match store.list::<Material>().await {
        Ok(materials) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            materials,
            "Material list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list materials: {e}"),
            )),
        ),
    }
}

pub async fn get_material(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: String,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    match store.get::<Material>(&material_id).await {
        Ok(Some(material)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            material,
            "Material retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MaterialNotFound,
            format!("Material with ID {material_id} not found"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get material: {e}"),
            )),
        ),
    }
}
