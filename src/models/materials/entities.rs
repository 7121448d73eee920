use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::storage::{Collection, Record};

// 资料类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub enum MaterialType {
    Document,
    Video,
    Presentation,
    Other,
}

// 课程资料实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct Material {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub subject_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub file_url: String,
    pub date_added: String,
}

impl Record for Material {
    const COLLECTION: Collection = Collection::Materials;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
