//! 通用记录存取
//!
//! 每个集合都是一个有序记录序列，所有写操作都整体重写集合。

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use super::Storage;
use crate::errors::Result;

/// 持久化集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Subjects,
    Assignments,
    Materials,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Subjects => "subjects",
            Collection::Assignments => "assignments",
            Collection::Materials => "materials",
        }
    }

    /// 对应的 JSON 文件名
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 可持久化的记录类型
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    /// 记录 ID，空字符串表示尚未分配
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 按类型解码原始记录，返回 (可解码记录, 无法解码的原始值)
fn decode_records<T: Record>(raw: Vec<Value>) -> (Vec<T>, Vec<Value>) {
    let mut records = Vec::with_capacity(raw.len());
    let mut undecodable = Vec::new();

    for value in raw {
        match serde_json::from_value::<T>(value.clone()) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(
                    "Skipping undecodable record {} in {}: {}",
                    value.get("id").and_then(serde_json::Value::as_str).unwrap_or("<no id>"),
                    T::COLLECTION,
                    e
                );
                undecodable.push(value);
            }
        }
    }

    (records, undecodable)
}

/// 基于存储后端的类型化记录仓库
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn Storage>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn Storage>) -> Self {
        Self { backend }
    }

    /// 读取集合全部记录，保持插入顺序
    ///
    /// 无法按当前类型解码的记录会被跳过，不影响同集合中的其他记录。
    pub async fn list<T: Record>(&self) -> Result<Vec<T>> {
        let raw = self.backend.load_collection(T::COLLECTION).await?;
        Ok(decode_records::<T>(raw).0)
    }

    /// 按 ID 线性查找
    pub async fn get<T: Record>(&self, id: &str) -> Result<Option<T>> {
        Ok(self
            .list::<T>()
            .await?
            .into_iter()
            .find(|record| record.id() == id))
    }

    /// 按条件过滤
    pub async fn filter<T, F>(&self, predicate: F) -> Result<Vec<T>>
    where
        T: Record,
        F: Fn(&T) -> bool,
    {
        Ok(self
            .list::<T>()
            .await?
            .into_iter()
            .filter(|record| predicate(record))
            .collect())
    }

    /// 插入或按 ID 原位替换
    pub async fn upsert<T: Record>(&self, mut record: T) -> Result<T> {
        let mut records = self.list::<T>().await?;

        if !record.id().is_empty()
            && let Some(slot) = records.iter_mut().find(|r| r.id() == record.id())
        {
            *slot = record.clone();
            self.replace_all(&records).await?;
            debug!("Replaced record {} in {}", record.id(), T::COLLECTION);
            return Ok(record);
        }

        if record.id().is_empty() {
            record.set_id(generate_id());
        }
        records.push(record.clone());
        self.replace_all(&records).await?;
        debug!("Appended record {} to {}", record.id(), T::COLLECTION);
        Ok(record)
    }

    /// 删除所有匹配 ID 的记录，只有确实删除时才写回
    pub async fn delete<T: Record>(&self, id: &str) -> Result<bool> {
        let mut records = self.list::<T>().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == before {
            return Ok(false);
        }

        self.replace_all(&records).await?;
        debug!("Deleted record {} from {}", id, T::COLLECTION);
        Ok(true)
    }

    /// 整体写回集合
    ///
    /// 库中无法解码的记录原样保留在末尾，写操作不会丢失旧数据。
    pub async fn replace_all<T: Record>(&self, records: &[T]) -> Result<()> {
        let existing = self.backend.load_collection(T::COLLECTION).await?;
        let (_, undecodable) = decode_records::<T>(existing);

        let mut raw = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        raw.extend(undecodable);
        self.backend.save_collection(T::COLLECTION, raw).await
    }

    /// 集合是否为空（从未写入也视为空）
    pub async fn is_empty(&self, collection: Collection) -> Result<bool> {
        Ok(self.backend.load_collection(collection).await?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subjects::entities::Subject;
    use crate::models::users::entities::User;
    use crate::storage::memory_storage::MemoryStorage;

    fn store() -> RecordStore {
        RecordStore::new(Arc::new(MemoryStorage::new()))
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            role: "student".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_list_empty_collection() {
        let store = store();
        let users: Vec<User> = store.list().await.unwrap();
        assert!(users.is_empty());
        assert!(store.is_empty(Collection::Users).await.unwrap());
    }

    #[actix_web::test]
    async fn test_upsert_generates_id_when_absent() {
        let store = store();
        let saved = store.upsert(user("", "alice")).await.unwrap();
        assert!(!saved.id.is_empty());

        let fetched: Option<User> = store.get(&saved.id).await.unwrap();
        assert_eq!(fetched, Some(saved));
    }

    #[actix_web::test]
    async fn test_upsert_same_id_replaces_in_place() {
        let store = store();
        store.upsert(user("u1", "alice")).await.unwrap();
        store.upsert(user("u2", "bob")).await.unwrap();
        store.upsert(user("u3", "carol")).await.unwrap();

        store.upsert(user("u2", "bobby")).await.unwrap();

        let users: Vec<User> = store.list().await.unwrap();
        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2", "u3"]);
        assert_eq!(users[1].name, "bobby");
        assert_eq!(users.iter().filter(|u| u.id == "u2").count(), 1);
    }

    #[actix_web::test]
    async fn test_upsert_unknown_id_appends_with_given_id() {
        let store = store();
        store.upsert(user("u1", "alice")).await.unwrap();
        let saved = store.upsert(user("custom", "dave")).await.unwrap();
        assert_eq!(saved.id, "custom");

        let users: Vec<User> = store.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].id, "custom");
    }

    #[actix_web::test]
    async fn test_get_missing_is_none() {
        let store = store();
        store.upsert(user("u1", "alice")).await.unwrap();
        let missing: Option<User> = store.get("nope").await.unwrap();
        assert!(missing.is_none());
    }

    #[actix_web::test]
    async fn test_delete_reports_removal() {
        let store = store();
        store.upsert(user("u1", "alice")).await.unwrap();

        assert!(store.delete::<User>("u1").await.unwrap());
        assert!(!store.delete::<User>("u1").await.unwrap());
        assert!(store.list::<User>().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_collections_are_independent() {
        let store = store();
        store.upsert(user("shared", "alice")).await.unwrap();
        let subject = Subject {
            id: "shared".to_string(),
            title: "Data Structures".to_string(),
            description: String::new(),
            code: "CS202".to_string(),
            image_url: None,
        };
        store.upsert(subject).await.unwrap();

        assert!(store.delete::<Subject>("shared").await.unwrap());
        assert!(store.get::<User>("shared").await.unwrap().is_some());
    }

    fn assignment_value(id: &str, kind: &str) -> Value {
        serde_json::json!({
            "id": id,
            "title": format!("Assignment {id}"),
            "subjectId": "1",
            "dueDate": "2025-06-01",
            "type": kind,
            "status": "upcoming",
            "maxGrade": 100,
            "submissions": []
        })
    }

    #[actix_web::test]
    async fn test_undecodable_record_does_not_poison_collection() {
        use crate::models::assignments::entities::Assignment;
        use crate::models::assignments::requests::SubmitAssignmentRequest;

        let backend = Arc::new(MemoryStorage::new());
        backend
            .save_collection(
                Collection::Assignments,
                vec![
                    assignment_value("good", "homework"),
                    assignment_value("legacy", "project"),
                ],
            )
            .await
            .unwrap();
        let store = RecordStore::new(backend.clone());

        let assignments: Vec<Assignment> = store.list().await.unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].id, "good");
        assert!(store.get::<Assignment>("legacy").await.unwrap().is_none());

        let submission = store
            .submit_assignment(
                "good",
                SubmitAssignmentRequest {
                    student_id: "st1".to_string(),
                    student_name: "Alex".to_string(),
                    files: Vec::new(),
                },
            )
            .await
            .unwrap();
        assert_eq!(submission.assignment_id, "good");

        // 写回后旧记录仍原样保留
        let raw = backend
            .load_collection(Collection::Assignments)
            .await
            .unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[1], assignment_value("legacy", "project"));
        assert_eq!(raw[0]["submissions"].as_array().unwrap().len(), 1);
    }
}
