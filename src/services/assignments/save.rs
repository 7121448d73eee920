use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::time::parse_flexible_date;
use crate::utils::validate::{validate_max_grade, validate_path_id, validate_required};

/// 作业字段校验
fn validate_assignment_fields(
    title: &str,
    subject_id: &str,
    due_date: &str,
    max_grade: i64,
    appeal_deadline: Option<&str>,
) -> Result<(), HttpResponse> {
    if let Err(msg) = validate_required("title", title)
        .and_then(|_| validate_required("subjectId", subject_id))
        .and_then(|_| validate_max_grade(max_grade))
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    for (field, value) in [("dueDate", Some(due_date)), ("appealDeadline", appeal_deadline)] {
        if let Some(value) = value
            && let Err(e) = parse_flexible_date(value)
        {
            return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AssignmentDateInvalid,
                format!("Invalid {field} '{value}': {}", e.message()),
            )));
        }
    }

    Ok(())
}

async fn save_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment: Assignment,
) -> Result<Assignment, HttpResponse> {
    let store = service.get_store(request);
    store.upsert(assignment).await.map_err(|e| {
        error!("Failed to save assignment: {}", e);
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to save assignment: {e}"),
        ))
    })
}

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = validate_assignment_fields(
        &assignment_data.title,
        &assignment_data.subject_id,
        &assignment_data.due_date,
        assignment_data.max_grade,
        None,
    ) {
        return Ok(resp);
    }

    match save_assignment(service, request, assignment_data.into_assignment()).await {
        Ok(assignment) => {
            info!(
                "Assignment {} created for subject {}",
                assignment.id, assignment.subject_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assignment,
                "Assignment created successfully",
            )))
        }
        Err(resp) => Ok(resp),
    }
}

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: String,
    assignment_data: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_path_id(&assignment_id, assignment_data.id.as_deref()) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::IdMismatch, msg)));
    }
    if let Err(resp) = validate_assignment_fields(
        &assignment_data.title,
        &assignment_data.subject_id,
        &assignment_data.due_date,
        assignment_data.max_grade,
        assignment_data.appeal_deadline.as_deref(),
    ) {
        return Ok(resp);
    }

    // 读取现有记录，未提供的 submissions 沿用旧值
    let store = service.get_store(request);
    let existing = match store.get::<Assignment>(&assignment_id).await {
        Ok(existing) => existing,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load assignment: {e}"),
                )),
            );
        }
    };

    let assignment = assignment_data.into_assignment(assignment_id, existing.as_ref());
    match save_assignment(service, request, assignment).await {
        Ok(assignment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment updated successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
