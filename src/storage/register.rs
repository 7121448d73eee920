use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, Once, RwLock},
};

use super::Storage;
use super::json_storage::JsonFileStorage;
use super::memory_storage::MemoryStorage;
use crate::config::AppConfig;
use crate::errors::Result;

pub type BoxedStorageFuture = Pin<Box<dyn Future<Output = Result<Arc<dyn Storage>>> + Send>>;
pub type StorageConstructor = Arc<dyn Fn(AppConfig) -> BoxedStorageFuture + Send + Sync>;

static STORAGE_REGISTRY: Lazy<RwLock<HashMap<String, StorageConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

static BUILTIN_PLUGINS: Once = Once::new();

pub fn register_storage_plugin<S: Into<String>>(name: S, constructor: StorageConstructor) {
    let name = name.into();
    let mut registry = STORAGE_REGISTRY
        .write()
        .expect("Storage registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_storage_plugin(name: &str) -> Option<StorageConstructor> {
    STORAGE_REGISTRY
        .read()
        .expect("Storage registry lock poisoned")
        .get(name)
        .cloned()
}

/// 注册内置后端：json（按集合落盘）与 memory（进程内）
pub fn register_builtin_plugins() {
    BUILTIN_PLUGINS.call_once(|| {
        register_storage_plugin(
            "json",
            Arc::new(|config: AppConfig| {
                Box::pin(async move {
                    let storage = JsonFileStorage::open(&config.storage.data_dir).await?;
                    Ok(Arc::new(storage) as Arc<dyn Storage>)
                }) as BoxedStorageFuture
            }),
        );
        register_storage_plugin(
            "memory",
            Arc::new(|_config: AppConfig| {
                Box::pin(async move { Ok(Arc::new(MemoryStorage::new()) as Arc<dyn Storage>) })
                    as BoxedStorageFuture
            }),
        );
    });
}

pub fn debug_storage_registry() {
    let registry = STORAGE_REGISTRY
        .read()
        .expect("Storage registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No storage plugins registered.");
    } else {
        tracing::debug!("Registered storage plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}
