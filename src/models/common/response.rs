//! 所有接口共用的响应信封
//!
//! 成功时 `code` 为 0，失败时为 [`ErrorCode`] 中的业务码，HTTP 状态码另由处理器决定。
//! `data` 为空时整个字段省略，前端据此区分“无数据”和 `null`。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    fn envelope(code: ErrorCode, data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 携带实体、列表或评分结果的成功响应
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::envelope(ErrorCode::Success, Some(data), message)
    }

    /// 附带细节的失败响应，例如评分失败时的 `GradingFailure`
    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self::envelope(code, Some(data), message)
    }
}

impl ApiResponse<()> {
    // 删除成功等无返回体的场景
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::envelope(ErrorCode::Success, None, message)
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::envelope(code, None, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_envelope_omits_data() {
        let value =
            serde_json::to_value(ApiResponse::error_empty(ErrorCode::SubjectNotFound, "Subject not found"))
                .unwrap();
        assert_eq!(value["code"], ErrorCode::SubjectNotFound as i32);
        assert_eq!(value["message"], "Subject not found");
        assert!(value.get("data").is_none());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_success_carries_data() {
        let value = serde_json::to_value(ApiResponse::success(vec![1, 2], "ok")).unwrap();
        assert_eq!(value["code"], 0);
        assert_eq!(value["data"], serde_json::json!([1, 2]));
    }
}
