use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::AssignmentService;
use crate::models::assignments::entities::Assignment;
use crate::models::{ApiResponse, ErrorCode};

// 删除作业会一并删除其内嵌的提交与申诉
pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: String,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    match store.delete::<Assignment>(&assignment_id).await {
        Ok(true) => {
            warn!("Assignment {} deleted with its submissions", assignment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Assignment deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            format!("Assignment with ID {assignment_id} not found"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Assignment deletion failed: {e}"),
            )),
        ),
    }
}
