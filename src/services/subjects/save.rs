use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::models::subjects::entities::Subject;
use crate::models::subjects::requests::SaveSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_path_id, validate_required};

fn validate_subject(subject_data: &SaveSubjectRequest) -> Result<(), HttpResponse> {
    validate_required("title", &subject_data.title)
        .and_then(|_| validate_required("code", &subject_data.code))
        .map_err(|msg| {
            HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
        })
}

async fn save_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject: Subject,
) -> Result<Subject, HttpResponse> {
    let store = service.get_store(request);
    store.upsert(subject).await.map_err(|e| {
        error!("Failed to save subject: {}", e);
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to save subject: {e}"),
        ))
    })
}

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_data: SaveSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = validate_subject(&subject_data) {
        return Ok(resp);
    }

    let id = subject_data.id.clone().unwrap_or_default();
    match save_subject(service, request, subject_data.into_subject(id)).await {
        Ok(subject) => {
            info!("Subject {} ({}) created", subject.id, subject.code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(resp) => Ok(resp),
    }
}

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: String,
    subject_data: SaveSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_path_id(&subject_id, subject_data.id.as_deref()) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::IdMismatch, msg)));
    }
    if let Err(resp) = validate_subject(&subject_data) {
        return Ok(resp);
    }

    match save_subject(service, request, subject_data.into_subject(subject_id)).await {
        Ok(subject) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(subject, "Subject updated successfully"))),
        Err(resp) => Ok(resp),
    }
}
