mod full_flow;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

use crate::models::grading::entities::{GradingFailure, GradingResult};
use crate::services::grading::Grader;
use crate::storage::RecordStore;
use crate::storage::memory_storage::MemoryStorage;

/// 固定返回结果的评分器
pub(super) struct StubGrader {
    pub outcome: Result<GradingResult, GradingFailure>,
}

#[async_trait]
impl Grader for StubGrader {
    async fn grade(
        &self,
        _task_path: &Path,
        _solution_path: &Path,
        _criteria: &str,
    ) -> Result<GradingResult, GradingFailure> {
        self.outcome.clone()
    }
}

pub(super) fn memory_store() -> RecordStore {
    RecordStore::new(Arc::new(MemoryStorage::new()))
}

pub(super) fn stub_grader(outcome: Result<GradingResult, GradingFailure>) -> Arc<dyn Grader> {
    Arc::new(StubGrader { outcome })
}

pub(super) async fn read_json<B: MessageBody>(response: ServiceResponse<B>) -> Value {
    actix_web::test::read_body_json(response).await
}

/// 以内存存储与给定评分器构建测试应用
macro_rules! test_app {
    ($store:expr, $grader:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler($crate::utils::json_error_handler),
                )
                .app_data(actix_web::web::Data::new($store))
                .app_data(actix_web::web::Data::new($grader))
                .app_data(actix_web::web::Data::new($crate::models::AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure($crate::routes::configure_all_routes),
        )
        .await
    };
    ($store:expr) => {
        test_app!(
            $store,
            $crate::routes::tests::stub_grader(Ok(
                $crate::models::grading::entities::GradingResult {
                    score: 0,
                    feedback: String::new(),
                }
            ))
        )
    };
}

pub(super) use test_app;
