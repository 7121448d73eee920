use serde::Deserialize;
use ts_rs::TS;

use super::entities::User;

// 用户保存请求（创建与整体更新共用）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct SaveUserRequest {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl SaveUserRequest {
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}
