use serde::Deserialize;
use tracing::{debug, info};

use super::{Collection, RecordStore};
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::materials::entities::Material;
use crate::models::subjects::entities::Subject;

const SEED_DATA: &str = include_str!("seed_data.json");

#[derive(Debug, Deserialize)]
struct SeedData {
    subjects: Vec<Subject>,
    assignments: Vec<Assignment>,
    materials: Vec<Material>,
}

/// 初始化结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub subjects: usize,
    pub assignments: usize,
    pub materials: usize,
}

impl SeedReport {
    pub fn is_noop(&self) -> bool {
        self.subjects == 0 && self.assignments == 0 && self.materials == 0
    }
}

/// 显式初始化存储
///
/// 只在课程集合为空时写入示例数据；作业与资料集合已有内容时保持不动。
/// 重复调用不会产生重复数据。
pub async fn initialize(store: &RecordStore, seed: bool) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    if !seed {
        debug!("Sample data seeding disabled");
        return Ok(report);
    }

    if !store.is_empty(Collection::Subjects).await? {
        debug!("Subjects collection already populated, skipping seed");
        return Ok(report);
    }

    let data: SeedData = serde_json::from_str(SEED_DATA)?;

    report.subjects = data.subjects.len();
    store.replace_all(&data.subjects).await?;

    if store.is_empty(Collection::Assignments).await? {
        report.assignments = data.assignments.len();
        store.replace_all(&data.assignments).await?;
    }

    if store.is_empty(Collection::Materials).await? {
        report.materials = data.materials.len();
        store.replace_all(&data.materials).await?;
    }

    info!(
        "Database initialized with sample data ({} subjects, {} assignments, {} materials)",
        report.subjects, report.assignments, report.materials
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::AssignmentStatus;
    use crate::storage::memory_storage::MemoryStorage;
    use std::sync::Arc;

    fn store() -> RecordStore {
        RecordStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_seed_data_parses() {
        let data: SeedData = serde_json::from_str(SEED_DATA).unwrap();
        assert_eq!(data.subjects.len(), 4);
        assert_eq!(data.assignments.len(), 3);
        assert_eq!(data.materials.len(), 2);
        assert_eq!(data.assignments[0].status, AssignmentStatus::Upcoming);
        assert_eq!(data.assignments[1].submissions[0].grade, Some(92));
    }

    #[actix_web::test]
    async fn test_initialize_is_idempotent() {
        let store = store();

        let first = initialize(&store, true).await.unwrap();
        assert_eq!(first.subjects, 4);
        assert!(!first.is_noop());

        let second = initialize(&store, true).await.unwrap();
        assert!(second.is_noop());

        let subjects: Vec<Subject> = store.list().await.unwrap();
        assert_eq!(subjects.len(), 4);
    }

    #[actix_web::test]
    async fn test_initialize_keeps_existing_assignments() {
        let store = store();
        let data: SeedData = serde_json::from_str(SEED_DATA).unwrap();
        let mine = vec![data.assignments[0].clone()];
        store.replace_all(&mine).await.unwrap();

        let report = initialize(&store, true).await.unwrap();
        assert_eq!(report.subjects, 4);
        assert_eq!(report.assignments, 0);

        let assignments: Vec<Assignment> = store.list().await.unwrap();
        assert_eq!(assignments.len(), 1);
    }

    #[actix_web::test]
    async fn test_initialize_disabled() {
        let store = store();
        let report = initialize(&store, false).await.unwrap();
        assert!(report.is_noop());
        assert!(store.is_empty(Collection::Subjects).await.unwrap());
    }
}
