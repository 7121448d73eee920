use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::submissions::lifecycle_error_response;
use crate::utils::validate::validate_required;

pub async fn submit_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: String,
    submission_data: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_required("studentId", &submission_data.student_id)
        .and_then(|_| validate_required("studentName", &submission_data.student_name))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let store = service.get_store(request);
    match store
        .submit_assignment(&assignment_id, submission_data)
        .await
    {
        Ok(submission) => Ok(HttpResponse::Created().json(ApiResponse::success(
            submission,
            "Assignment submitted successfully",
        ))),
        Err(e) => Ok(lifecycle_error_response(
            &e,
            ErrorCode::AssignmentNotFound,
            ErrorCode::BadRequest,
        )),
    }
}
