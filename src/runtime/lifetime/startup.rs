use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::grading::{GeminiGrader, Grader};
use crate::storage::{RecordStore, create_storage, register, seed};

pub struct StartupContext {
    pub store: RecordStore,
    pub grader: Arc<dyn Grader>,
}

/// 创建评分客户端
fn create_grader(config: &AppConfig) -> Result<Arc<dyn Grader>> {
    let grader = GeminiGrader::from_config(&config.grader)?;
    if config.grader.api_key.is_empty() {
        warn!("GOOGLE_API_KEY is not set, /api/grade will fail until it is configured");
    }
    warn!("Grading client ready (model: {})", grader.model());
    Ok(Arc::new(grader))
}

/// 准备服务器启动的上下文
/// 包括存储、示例数据和评分客户端
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    if cfg!(debug_assertions) {
        register::register_builtin_plugins();
        register::debug_storage_registry();
        debug!("Debug mode: Storage registry is enabled");
    }

    let backend = create_storage(&config.storage.backend, config).await?;
    let store = RecordStore::new(backend);

    // 显式初始化，空库时写入示例数据
    let report = seed::initialize(&store, config.storage.seed).await?;
    if report.is_noop() {
        debug!("Existing data found, no sample data written");
    }

    let grader = create_grader(config)?;

    Ok(StartupContext { store, grader })
}
