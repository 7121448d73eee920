pub mod gemini;
pub mod grade;
pub mod parse;

pub use gemini::GeminiGrader;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::models::grading::entities::{GradingFailure, GradingResult};
use crate::models::grading::requests::GradeHomeworkRequest;

/// AI 评分协作方
#[async_trait]
pub trait Grader: Send + Sync {
    async fn grade(
        &self,
        task_path: &Path,
        solution_path: &Path,
        criteria: &str,
    ) -> Result<GradingResult, GradingFailure>;
}

pub struct GradingService {
    grader: Option<Arc<dyn Grader>>,
}

impl GradingService {
    pub fn new_lazy() -> Self {
        Self { grader: None }
    }

    pub(crate) fn get_grader(&self, request: &HttpRequest) -> Arc<dyn Grader> {
        if let Some(grader) = &self.grader {
            grader.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Grader>>>()
                .expect("Grader not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 调用 AI 评分
    pub async fn grade_homework(
        &self,
        request: &HttpRequest,
        grade_request: GradeHomeworkRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_homework(self, request, grade_request).await
    }
}
