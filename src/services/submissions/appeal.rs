use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, lifecycle_error_response};
use crate::models::assignments::requests::CreateAppealRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_required;

pub async fn submit_appeal(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: String,
    appeal_data: CreateAppealRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_required("reason", &appeal_data.reason) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let store = service.get_store(request);
    match store.submit_appeal(&submission_id, appeal_data.reason).await {
        Ok(appeal) => Ok(HttpResponse::Created().json(ApiResponse::success(
            appeal,
            "Appeal submitted successfully",
        ))),
        Err(e) => Ok(lifecycle_error_response(
            &e,
            ErrorCode::SubmissionNotFound,
            ErrorCode::AppealNotAllowed,
        )),
    }
}
