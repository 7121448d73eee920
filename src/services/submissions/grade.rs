use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, lifecycle_error_response};
use crate::models::assignments::requests::GradeSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_grade;

pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: String,
    grade_data: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_grade(grade_data.grade) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let store = service.get_store(request);
    match store
        .grade_submission(&submission_id, grade_data.grade, grade_data.feedback)
        .await
    {
        Ok(submission) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            submission,
            "Submission graded successfully",
        ))),
        Err(e) => Ok(lifecycle_error_response(
            &e,
            ErrorCode::SubmissionNotFound,
            ErrorCode::BadRequest,
        )),
    }
}

pub async fn review_appeal(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: String,
    review_data: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_grade(review_data.grade) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let store = service.get_store(request);
    match store
        .review_appeal(&submission_id, review_data.grade, review_data.feedback)
        .await
    {
        Ok(submission) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            submission,
            "Appeal reviewed successfully",
        ))),
        Err(e) => Ok(lifecycle_error_response(
            &e,
            ErrorCode::AppealNotFound,
            ErrorCode::BadRequest,
        )),
    }
}
