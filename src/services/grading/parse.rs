//! 评分模型回复解析
//!
//! 模型被要求只返回 `{"score": ..., "feedback": ...}`，实际回复常带有 ```json 代码围栏，
//! 分数也可能是浮点数或字符串。

use serde_json::Value;

use crate::models::grading::entities::{GradingFailure, GradingFailureKind, GradingResult};

const SCORE_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// 去掉回复首尾的 Markdown 代码围栏
pub fn strip_code_fences(text: &str) -> &str {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim()
}

fn score_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// 解析模型回复文本
pub fn parse_grading_response(text: &str) -> Result<GradingResult, GradingFailure> {
    let cleaned = strip_code_fences(text);

    let parsed: Value = serde_json::from_str(cleaned).map_err(|_| {
        GradingFailure::new(
            GradingFailureKind::MalformedResponse,
            "Failed to parse Gemini response as JSON.",
        )
        .with_raw_response(text)
    })?;

    let (Some(score), Some(feedback)) = (parsed.get("score"), parsed.get("feedback")) else {
        return Err(GradingFailure::new(
            GradingFailureKind::MalformedResponse,
            "Gemini response did not contain 'score' and 'feedback' keys.",
        )
        .with_raw_response(cleaned));
    };

    let score = score_from_value(score).ok_or_else(|| {
        GradingFailure::new(
            GradingFailureKind::MalformedResponse,
            "Failed to parse Gemini response as JSON.",
        )
        .with_raw_response(text)
    })?;

    if !SCORE_RANGE.contains(&score) {
        return Err(GradingFailure::new(
            GradingFailureKind::MalformedResponse,
            format!("Gemini response score {score} is outside 0-100."),
        )
        .with_raw_response(cleaned));
    }

    let feedback = match feedback {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    Ok(GradingResult { score, feedback })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json() {
        let result = parse_grading_response(r#"{"score": 85, "feedback": "Good"}"#).unwrap();
        assert_eq!(result.score, 85);
        assert_eq!(result.feedback, "Good");
    }

    #[test]
    fn test_fenced_json_with_string_score() {
        let text = "```json\n{\n  \"score\": \"92\",\n  \"feedback\": \"Clear steps\"\n}\n```";
        let result = parse_grading_response(text).unwrap();
        assert_eq!(result.score, 92);
        assert_eq!(result.feedback, "Clear steps");
    }

    #[test]
    fn test_float_score_is_truncated() {
        let result = parse_grading_response(r#"{"score": 77.9, "feedback": "ok"}"#).unwrap();
        assert_eq!(result.score, 77);
    }

    #[test]
    fn test_missing_keys() {
        let err = parse_grading_response(r#"{"grade": 85}"#).unwrap_err();
        assert_eq!(err.kind, GradingFailureKind::MalformedResponse);
        assert!(err.error.contains("'score' and 'feedback'"));
        assert_eq!(err.raw_response.as_deref(), Some(r#"{"grade": 85}"#));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_not_json() {
        let err = parse_grading_response("I think this deserves an A").unwrap_err();
        assert_eq!(err.error, "Failed to parse Gemini response as JSON.");
        assert_eq!(
            err.raw_response.as_deref(),
            Some("I think this deserves an A")
        );
    }

    #[test]
    fn test_non_numeric_score() {
        let err = parse_grading_response(r#"{"score": "A+", "feedback": "nice"}"#).unwrap_err();
        assert_eq!(err.kind, GradingFailureKind::MalformedResponse);
    }

    #[test]
    fn test_out_of_range_score() {
        for text in [
            r#"{"score": -5, "feedback": "odd"}"#,
            r#"{"score": 250, "feedback": "odd"}"#,
            r#"{"score": "101", "feedback": "odd"}"#,
        ] {
            let err = parse_grading_response(text).unwrap_err();
            assert_eq!(err.kind, GradingFailureKind::MalformedResponse);
            assert_eq!(err.raw_response.as_deref(), Some(text));
        }

        assert_eq!(
            parse_grading_response(r#"{"score": 100, "feedback": "full"}"#)
                .unwrap()
                .score,
            100
        );
        assert_eq!(
            parse_grading_response(r#"{"score": 0, "feedback": "none"}"#)
                .unwrap()
                .score,
            0
        );
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }
}
