use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// AI 评分结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct GradingResult {
    pub score: i64,
    pub feedback: String,
}

/// AI 评分失败原因
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct GradingFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(skip)]
    #[ts(skip)]
    pub kind: GradingFailureKind,
}

/// 失败分类，决定对外返回 4xx 还是 5xx
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradingFailureKind {
    UnsupportedFileType,
    FileNotFound,
    #[default]
    Upstream,
    MalformedResponse,
}

impl GradingFailure {
    pub fn new(kind: GradingFailureKind, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw_response: None,
            kind,
        }
    }

    pub fn with_raw_response(mut self, raw: impl Into<String>) -> Self {
        self.raw_response = Some(raw.into());
        self
    }

    /// 是否属于调用方的输入问题
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind,
            GradingFailureKind::UnsupportedFileType | GradingFailureKind::FileNotFound
        )
    }
}

impl std::fmt::Display for GradingFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for GradingFailure {}
