use serde::Deserialize;
use ts_rs::TS;

use super::entities::{Material, MaterialType};

// 资料创建请求，文件已由调用方上传，这里只记录地址
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct CreateMaterialRequest {
    pub title: String,
    #[serde(alias = "subject_id")]
    pub subject_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", alias = "material_type")]
    pub material_type: MaterialType,
    #[serde(alias = "file_url")]
    pub file_url: String,
}

impl CreateMaterialRequest {
    pub fn into_material(self, date_added: String) -> Material {
        Material {
            id: String::new(),
            title: self.title,
            subject_id: self.subject_id,
            description: self.description,
            material_type: self.material_type,
            file_url: self.file_url,
            date_added,
        }
    }
}

// 资料整体更新请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct UpdateMaterialRequest {
    pub id: Option<String>,
    pub title: String,
    pub subject_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub file_url: String,
    pub date_added: String,
}

impl UpdateMaterialRequest {
    pub fn into_material(self, id: String) -> Material {
        Material {
            id,
            title: self.title,
            subject_id: self.subject_id,
            description: self.description,
            material_type: self.material_type,
            file_url: self.file_url,
            date_added: self.date_added,
        }
    }
}
