use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::assignments::entities::Assignment;
use crate::models::materials::entities::Material;
use crate::models::subjects::entities::Subject;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    match store.list::<Subject>().await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subjects,
            "Subject list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list subjects: {e}"),
            )),
        ),
    }
}

// 课程不存在时返回空列表，与按学生查询提交的行为一致
pub async fn list_subject_assignments(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: String,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    match store
        .filter::<Assignment, _>(|a| a.subject_id == subject_id)
        .await
    {
        Ok(assignments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignments,
            "Subject assignments retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list assignments for subject {subject_id}: {e}"),
            )),
        ),
    }
}

pub async fn list_subject_materials(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: String,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    match store
        .filter::<Material, _>(|m| m.subject_id == subject_id)
        .await
    {
        Ok(materials) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            materials,
            "Subject materials retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list materials for subject {subject_id}: {e}"),
            )),
        ),
    }
}
