//! JSON 文件存储
//!
//! 每个集合对应数据目录下的一个 JSON 数组文件（`users.json` 等），
//! 与既有部署的数据布局保持一致。写入先落到临时文件再重命名覆盖，
//! 写失败时旧文件仍然可读。

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{Collection, Storage};
use crate::errors::{GradiatorError, Result};

pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// 打开（必要时创建）数据目录
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        if data_dir.as_os_str().is_empty() {
            return Err(GradiatorError::storage_config(
                "storage.data_dir must not be empty",
            ));
        }

        tokio::fs::create_dir_all(&data_dir).await.map_err(|e| {
            GradiatorError::file_operation(format!(
                "Failed to create data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        debug!("JSON storage opened at {}", data_dir.display());
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn load_collection(&self, collection: Collection) -> Result<Vec<Value>> {
        let path = self.collection_path(collection);

        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(GradiatorError::file_operation(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        // 损坏的文件按空集合处理，与既有部署行为一致
        match serde_json::from_slice::<Vec<Value>>(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(
                    "Collection file {} is not a valid JSON array ({}), treating as empty",
                    path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save_collection(&self, collection: Collection, records: Vec<Value>) -> Result<()> {
        let path = self.collection_path(collection);
        let tmp_path = self
            .data_dir
            .join(format!(".{}.tmp", collection.file_name()));

        let content = serde_json::to_vec_pretty(&records)?;
        tokio::fs::write(&tmp_path, &content).await.map_err(|e| {
            GradiatorError::file_operation(format!("Failed to write {}: {e}", tmp_path.display()))
        })?;
        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            GradiatorError::file_operation(format!(
                "Failed to replace {}: {e}",
                path.display()
            ))
        })?;

        debug!("Wrote {} record(s) to {}", records.len(), path.display());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[actix_web::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).await.unwrap();
        let records = storage.load_collection(Collection::Subjects).await.unwrap();
        assert!(records.is_empty());
    }

    #[actix_web::test]
    async fn test_save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).await.unwrap();
        let records = vec![json!({"id": "b"}), json!({"id": "a"}), json!({"id": "c"})];

        storage
            .save_collection(Collection::Users, records.clone())
            .await
            .unwrap();

        let loaded = storage.load_collection(Collection::Users).await.unwrap();
        assert_eq!(loaded, records);
        assert!(dir.path().join("users.json").exists());
        assert!(!dir.path().join(".users.json.tmp").exists());
    }

    #[actix_web::test]
    async fn test_file_is_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).await.unwrap();
        storage
            .save_collection(Collection::Materials, vec![json!({"id": "m1"})])
            .await
            .unwrap();

        let text = std::fs::read_to_string(dir.path().join("materials.json")).unwrap();
        assert!(text.starts_with('['));
        assert!(text.contains('\n'));
    }

    #[actix_web::test]
    async fn test_corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("assignments.json"), b"{ not json").unwrap();
        let storage = JsonFileStorage::open(dir.path()).await.unwrap();

        let records = storage
            .load_collection(Collection::Assignments)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[actix_web::test]
    async fn test_open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("db");
        let storage = JsonFileStorage::open(&nested).await.unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.data_dir(), nested.as_path());
    }
}
