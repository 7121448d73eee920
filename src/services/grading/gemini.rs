//! Gemini 评分客户端
//!
//! 把题目文件与学生解答图片以 base64 内联到一次 `generateContent` 调用中，
//! 不做重试，超时由客户端配置控制。

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde_json::{Value, json};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::Grader;
use super::parse::parse_grading_response;
use crate::config::GraderConfig;
use crate::errors::{GradiatorError, Result};
use crate::models::grading::entities::{GradingFailure, GradingFailureKind, GradingResult};
use crate::utils::media_type::{MediaType, display_extension};

const PROMPT_INTRO: &str = "You are an AI grader for education assignments. Please grade the following solution according to the provided criteria.";

const PROMPT_FORMAT: &str = r#"
Please provide the feedback for the solution in the following JSON format:
{
    "score": "score",
    "feedback": "some feedback up to 70 words"
}
"#;

fn criteria_prompt(criteria: &str) -> String {
    format!("\n**Grading Criteria:**\n{criteria}\n\n**Student's Solution Image:**\n[Image below]")
}

/// 已读取并校验过的待上传文件
struct InlineFile {
    media_type: MediaType,
    data: Vec<u8>,
}

impl InlineFile {
    fn to_part(&self) -> Value {
        json!({
            "inline_data": {
                "mime_type": self.media_type.mime_type(),
                "data": STANDARD.encode(&self.data),
            }
        })
    }
}

async fn read_file(path: &Path) -> std::result::Result<Vec<u8>, GradingFailure> {
    match tokio::fs::read(path).await {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(GradingFailure::new(
            GradingFailureKind::FileNotFound,
            format!("File not found: {}", path.display()),
        )),
        Err(e) => Err(GradingFailure::new(
            GradingFailureKind::Upstream,
            format!("An unexpected error occurred during grading: {e}"),
        )),
    }
}

/// 读取题目文件：图片或 PDF
async fn load_task_file(path: &Path) -> std::result::Result<InlineFile, GradingFailure> {
    let media_type = MediaType::from_path(path).ok_or_else(|| {
        GradingFailure::new(
            GradingFailureKind::UnsupportedFileType,
            format!("Unsupported task file type: {}", display_extension(path)),
        )
    })?;

    let data = read_file(path).await?;
    if !media_type.matches_magic(&data) {
        return Err(GradingFailure::new(
            GradingFailureKind::UnsupportedFileType,
            format!(
                "Unsupported task file type: content of {} is not {}",
                path.display(),
                media_type.mime_type()
            ),
        ));
    }

    Ok(InlineFile { media_type, data })
}

/// 读取学生解答：只接受图片
async fn load_solution_file(path: &Path) -> std::result::Result<InlineFile, GradingFailure> {
    let media_type = MediaType::from_path(path)
        .filter(MediaType::is_image)
        .ok_or_else(|| {
            GradingFailure::new(
                GradingFailureKind::UnsupportedFileType,
                format!("Unsupported solution file type: {}", display_extension(path)),
            )
        })?;

    let data = read_file(path).await?;
    if !media_type.matches_magic(&data) {
        return Err(GradingFailure::new(
            GradingFailureKind::UnsupportedFileType,
            format!(
                "Unsupported solution file type: content of {} is not {}",
                path.display(),
                media_type.mime_type()
            ),
        ));
    }

    Ok(InlineFile { media_type, data })
}

/// 拼出回复中所有文本片段
fn extract_text(body: &Value) -> Option<String> {
    let parts = body
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}

#[derive(Debug, Clone)]
pub struct GeminiGrader {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiGrader {
    pub fn from_config(config: &GraderConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GradiatorError::grading(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_payload(task: &InlineFile, solution: &InlineFile, criteria: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {"text": PROMPT_INTRO},
                    task.to_part(),
                    {"text": criteria_prompt(criteria)},
                    solution.to_part(),
                    {"text": PROMPT_FORMAT},
                ]
            }]
        })
    }
}

#[async_trait]
impl Grader for GeminiGrader {
    async fn grade(
        &self,
        task_path: &Path,
        solution_path: &Path,
        criteria: &str,
    ) -> std::result::Result<GradingResult, GradingFailure> {
        debug!("Grading - Processing task file: {}", task_path.display());
        let task = load_task_file(task_path).await?;
        debug!("Grading - Loading solution image: {}", solution_path.display());
        let solution = load_solution_file(solution_path).await?;

        if self.api_key.is_empty() {
            return Err(GradingFailure::new(
                GradingFailureKind::Upstream,
                "Grading service is not configured: GOOGLE_API_KEY is missing",
            ));
        }

        let payload = Self::build_payload(&task, &solution, criteria);
        let timer = Instant::now();
        info!(model = %self.model, "Sending grading request to Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                GradingFailure::new(
                    GradingFailureKind::Upstream,
                    format!("An unexpected error occurred during grading: {e}"),
                )
            })?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);
        if !status.is_success() {
            warn!("Gemini API returned {}: {}", status, body);
            return Err(GradingFailure::new(
                GradingFailureKind::Upstream,
                format!("Gemini API error ({status})"),
            )
            .with_raw_response(body.to_string()));
        }

        let text = extract_text(&body).ok_or_else(|| {
            GradingFailure::new(
                GradingFailureKind::MalformedResponse,
                "Gemini response contained no text",
            )
            .with_raw_response(body.to_string())
        })?;

        let result = parse_grading_response(&text)?;
        info!(
            model = %self.model,
            duration_seconds = timer.elapsed().as_secs_f64(),
            score = result.score,
            "Gemini grading completed"
        );
        Ok(result)
    }
}
