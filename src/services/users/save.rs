use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::users::entities::User;
use crate::models::users::requests::SaveUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_path_id, validate_required};

fn validate_user(user_data: &SaveUserRequest) -> Result<(), HttpResponse> {
    if let Err(msg) = validate_required("name", &user_data.name) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_email(&user_data.email) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }
    if let Err(msg) = validate_required("role", &user_data.role) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    Ok(())
}

async fn save_user(
    service: &UserService,
    request: &HttpRequest,
    user: User,
) -> Result<User, HttpResponse> {
    let store = service.get_store(request);
    store.upsert(user).await.map_err(|e| {
        error!("Failed to save user: {}", e);
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to save user: {e}"),
        ))
    })
}

pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    user_data: SaveUserRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = validate_user(&user_data) {
        return Ok(resp);
    }

    // 请求体可以携带 ID，否则由存储层生成
    let id = user_data.id.clone().unwrap_or_default();
    match save_user(service, request, user_data.into_user(id)).await {
        Ok(user) => {
            info!("User {} created", user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "User created successfully")))
        }
        Err(resp) => Ok(resp),
    }
}

pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: String,
    user_data: SaveUserRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_path_id(&user_id, user_data.id.as_deref()) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::IdMismatch, msg)));
    }
    if let Err(resp) = validate_user(&user_data) {
        return Ok(resp);
    }

    match save_user(service, request, user_data.into_user(user_id)).await {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(user, "User updated successfully"))),
        Err(resp) => Ok(resp),
    }
}
