use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::{CreateAppealRequest, GradeSubmissionRequest};
use crate::services::SubmissionService;

// 懒加载的全局 SUBMISSION_SERVICE 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

pub async fn get_submission(
    req: HttpRequest,
    submission_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission(&req, submission_id.into_inner())
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    submission_id: web::Path<String>,
    grade_data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, submission_id.into_inner(), grade_data.into_inner())
        .await
}

pub async fn submit_appeal(
    req: HttpRequest,
    submission_id: web::Path<String>,
    appeal_data: web::Json<CreateAppealRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit_appeal(&req, submission_id.into_inner(), appeal_data.into_inner())
        .await
}

pub async fn review_appeal(
    req: HttpRequest,
    submission_id: web::Path<String>,
    review_data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .review_appeal(&req, submission_id.into_inner(), review_data.into_inner())
        .await
}

pub async fn list_student_submissions(
    req: HttpRequest,
    student_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_student_submissions(&req, student_id.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/submissions")
            .route("/{id}", web::get().to(get_submission))
            .route("/{id}/grade", web::post().to(grade_submission))
            .route("/{id}/appeal", web::post().to(submit_appeal))
            .route("/{id}/review-appeal", web::post().to(review_appeal)),
    )
    .service(
        web::scope("/api/students")
            .route("/{id}/submissions", web::get().to(list_student_submissions)),
    );
}
