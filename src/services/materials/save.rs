use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::MaterialService;
use crate::models::materials::entities::Material;
use crate::models::materials::requests::{CreateMaterialRequest, UpdateMaterialRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::time::now_timestamp;
use crate::utils::validate::{validate_path_id, validate_required};

fn validation_error(msg: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
}

async fn save_material(
    service: &MaterialService,
    request: &HttpRequest,
    material: Material,
) -> Result<Material, HttpResponse> {
    let store = service.get_store(request);
    store.upsert(material).await.map_err(|e| {
        error!("Failed to save material: {}", e);
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to save material: {e}"),
        ))
    })
}

pub async fn create_material(
    service: &MaterialService,
    request: &HttpRequest,
    material_data: CreateMaterialRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_required("title", &material_data.title)
        .and_then(|_| validate_required("subjectId", &material_data.subject_id))
        .and_then(|_| validate_required("fileUrl", &material_data.file_url))
    {
        return Ok(validation_error(msg));
    }

    let material = material_data.into_material(now_timestamp());
    match save_material(service, request, material).await {
        Ok(material) => {
            info!(
                "Material {} added to subject {}",
                material.id, material.subject_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(material, "Material created successfully")))
        }
        Err(resp) => Ok(resp),
    }
}

pub async fn update_material(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: String,
    material_data: UpdateMaterialRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_path_id(&material_id, material_data.id.as_deref()) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::IdMismatch, msg)));
    }
    if let Err(msg) = validate_required("title", &material_data.title)
        .and_then(|_| validate_required("subjectId", &material_data.subject_id))
    {
        return Ok(validation_error(msg));
    }

    match save_material(service, request, material_data.into_material(material_id)).await {
        Ok(material) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(material, "Material updated successfully"))),
        Err(resp) => Ok(resp),
    }
}
