use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::entities::Subject;
use crate::models::{ApiResponse, ErrorCode};

// 只删除课程本身，关联的作业与资料保留
pub async fn delete_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: String,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    match store.delete::<Subject>(&subject_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Subject deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            format!("Subject with ID {subject_id} not found"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Subject deletion failed: {e}"),
            )),
        ),
    }
}
