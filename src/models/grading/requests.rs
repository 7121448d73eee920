use serde::Deserialize;
use ts_rs::TS;

// AI 评分请求，文件路径相对于配置的上传目录
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct GradeHomeworkRequest {
    #[serde(alias = "task_file")]
    pub task_file: String,
    #[serde(alias = "solution_file")]
    pub solution_file: String,
    pub criteria: String,
}
