//! 数据存储层
//!
//! - `Storage`: 按集合整体读写 JSON 记录的后端接口
//! - `RecordStore`: 在后端之上提供类型化的 list/get/upsert/delete
//! - `submissions`: 提交、评分、申诉的状态流转
//! - `seed`: 启动时的幂等初始化

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::config::AppConfig;
use crate::errors::{GradiatorError, Result};

pub mod json_storage;
pub mod memory_storage;
pub mod records;
pub mod register;
pub mod seed;
pub mod submissions;

pub use records::{Collection, Record, RecordStore};

#[async_trait]
pub trait Storage: Send + Sync {
    /// 读取整个集合；从未写入过的集合返回空列表
    async fn load_collection(&self, collection: Collection) -> Result<Vec<Value>>;
    /// 用给定记录整体替换集合
    async fn save_collection(&self, collection: Collection, records: Vec<Value>) -> Result<()>;
    /// 后端名称，用于日志
    fn backend_name(&self) -> &'static str;
}

/// 按名称创建存储后端
pub async fn create_storage(backend: &str, config: &AppConfig) -> Result<Arc<dyn Storage>> {
    register::register_builtin_plugins();

    let constructor = register::get_storage_plugin(backend).ok_or_else(|| {
        GradiatorError::storage_plugin_not_found(format!(
            "Storage backend '{backend}' is not registered"
        ))
    })?;

    match constructor(config.clone()).await {
        Ok(storage) => {
            warn!("Storage backend '{}' initialized", storage.backend_name());
            Ok(storage)
        }
        Err(e) => {
            warn!("Failed to create '{}' storage backend: {}", backend, e);
            Err(e)
        }
    }
}
