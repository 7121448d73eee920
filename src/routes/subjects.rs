use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::subjects::requests::SaveSubjectRequest;
use crate::services::SubjectService;

// 懒加载的全局 SUBJECT_SERVICE 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<SaveSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(&req, subject_data.into_inner())
        .await
}

pub async fn get_subject(
    req: HttpRequest,
    subject_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .get_subject(&req, subject_id.into_inner())
        .await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: web::Path<String>,
    subject_data: web::Json<SaveSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(&req, subject_id.into_inner(), subject_data.into_inner())
        .await
}

pub async fn delete_subject(
    req: HttpRequest,
    subject_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .delete_subject(&req, subject_id.into_inner())
        .await
}

pub async fn list_subject_assignments(
    req: HttpRequest,
    subject_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .list_subject_assignments(&req, subject_id.into_inner())
        .await
}

pub async fn list_subject_materials(
    req: HttpRequest,
    subject_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .list_subject_materials(&req, subject_id.into_inner())
        .await
}

// 配置路由
pub fn configure_subjects_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/subjects")
            .service(
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(web::post().to(create_subject)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_subject))
                    .route(web::put().to(update_subject))
                    .route(web::delete().to(delete_subject)),
            )
            .route("/{id}/assignments", web::get().to(list_subject_assignments))
            .route("/{id}/materials", web::get().to(list_subject_materials)),
    );
}
