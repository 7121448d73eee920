use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Collection, Storage};
use crate::errors::Result;

/// 进程内存储，重启即丢失，主要用于测试与临时运行
#[derive(Default)]
pub struct MemoryStorage {
    collections: RwLock<HashMap<Collection, Vec<Value>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_collection(&self, collection: Collection) -> Result<Vec<Value>> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn save_collection(&self, collection: Collection, records: Vec<Value>) -> Result<()> {
        debug!(
            "Saving {} record(s) to in-memory collection {}",
            records.len(),
            collection
        );
        self.collections.write().await.insert(collection, records);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
