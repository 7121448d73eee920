pub mod appeal;
pub mod get;
pub mod grade;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::errors::GradiatorError;
use crate::models::assignments::requests::{CreateAppealRequest, GradeSubmissionRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::RecordStore;

pub struct SubmissionService {
    store: Option<RecordStore>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { store: None }
    }

    pub(crate) fn get_store(&self, request: &HttpRequest) -> RecordStore {
        if let Some(store) = &self.store {
            store.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<RecordStore>>()
                .expect("RecordStore not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 根据ID获取提交
    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_submission(self, request, submission_id).await
    }

    // 某学生的全部提交
    pub async fn list_student_submissions(
        &self,
        request: &HttpRequest,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        get::list_student_submissions(self, request, student_id).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: String,
        grade_data: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, grade_data).await
    }

    // 发起申诉
    pub async fn submit_appeal(
        &self,
        request: &HttpRequest,
        submission_id: String,
        appeal_data: CreateAppealRequest,
    ) -> ActixResult<HttpResponse> {
        appeal::submit_appeal(self, request, submission_id, appeal_data).await
    }

    // 复核申诉
    pub async fn review_appeal(
        &self,
        request: &HttpRequest,
        submission_id: String,
        review_data: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::review_appeal(self, request, submission_id, review_data).await
    }
}

/// 状态流转失败时的统一响应：NotFound 为 404，InvalidState / Validation 为 400，其余 500
pub(crate) fn lifecycle_error_response(
    err: &GradiatorError,
    not_found_code: ErrorCode,
    invalid_state_code: ErrorCode,
) -> HttpResponse {
    match err {
        GradiatorError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(not_found_code, msg.clone()))
        }
        GradiatorError::InvalidState(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(invalid_state_code, msg.clone())),
        GradiatorError::Validation(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg.clone())),
        other => {
            error!("Submission operation failed: {}", other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                other.to_string(),
            ))
        }
    }
}
