use serde::Deserialize;
use ts_rs::TS;

use super::entities::Subject;

// 课程保存请求（创建与整体更新共用）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct SaveSubjectRequest {
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub code: String,
    pub image_url: Option<String>,
}

impl SaveSubjectRequest {
    pub fn into_subject(self, id: String) -> Subject {
        Subject {
            id,
            title: self.title,
            description: self.description,
            code: self.code,
            image_url: self.image_url,
        }
    }
}
