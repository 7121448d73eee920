use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

use super::GradingService;
use crate::config::AppConfig;
use crate::models::grading::requests::GradeHomeworkRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 把请求中的文件地址解析到上传目录下
///
/// 接受 `hw2.jpg`、`tasks/hw2.pdf` 以及记录中保存的 `/uploads/hw2.jpg` 形式；
/// 绝对路径和包含 `..` 的路径一律拒绝。
pub fn resolve_upload_path(upload_dir: &Path, file: &str) -> Option<PathBuf> {
    let relative = file.trim();
    let relative = relative
        .strip_prefix("/uploads/")
        .unwrap_or(relative)
        .trim_start_matches('/');

    if relative.is_empty() {
        return None;
    }

    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }

    Some(upload_dir.join(relative))
}

pub async fn grade_homework(
    service: &GradingService,
    request: &HttpRequest,
    grade_request: GradeHomeworkRequest,
) -> ActixResult<HttpResponse> {
    let upload_dir = Path::new(&AppConfig::get().grader.upload_dir);

    let (Some(task_path), Some(solution_path)) = (
        resolve_upload_path(upload_dir, &grade_request.task_file),
        resolve_upload_path(upload_dir, &grade_request.solution_file),
    ) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradingRequestInvalid,
            "taskFile and solutionFile must be relative paths inside the upload directory",
        )));
    };

    info!(
        "Grading request received. Task: {}, Solution: {}",
        grade_request.task_file, grade_request.solution_file
    );

    let grader = service.get_grader(request);
    match grader
        .grade(&task_path, &solution_path, &grade_request.criteria)
        .await
    {
        Ok(result) => {
            info!("Grading successful for task {}", grade_request.task_file);
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, "Grading completed")))
        }
        Err(failure) => {
            warn!("Grading returned an error: {}", failure.error);
            let message = failure.error.clone();
            if failure.is_client_error() {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error(
                    ErrorCode::GradingRequestInvalid,
                    failure,
                    message,
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error(
                        ErrorCode::GradingFailed,
                        failure,
                        message,
                    )),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_upload_path() {
        let root = Path::new("uploads");
        assert_eq!(
            resolve_upload_path(root, "hw2.jpg"),
            Some(PathBuf::from("uploads/hw2.jpg"))
        );
        assert_eq!(
            resolve_upload_path(root, "/uploads/task.pdf"),
            Some(PathBuf::from("uploads/task.pdf"))
        );
        assert_eq!(
            resolve_upload_path(root, "tasks/week1.pdf"),
            Some(PathBuf::from("uploads/tasks/week1.pdf"))
        );
    }

    #[test]
    fn test_resolve_upload_path_rejects_escape() {
        let root = Path::new("uploads");
        assert_eq!(resolve_upload_path(root, "../secrets.json"), None);
        assert_eq!(resolve_upload_path(root, "a/../../b.png"), None);
        assert_eq!(resolve_upload_path(root, "./a.png"), None);
        assert_eq!(resolve_upload_path(root, ""), None);
    }
}
