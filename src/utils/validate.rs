use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 成绩允许的上限，防止误输入的超大数值写入
pub const MAX_GRADE_LIMIT: i64 = 100_000;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 必填文本字段不能为空白
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("Field '{field}' must not be empty"));
    }
    Ok(())
}

pub fn validate_max_grade(max_grade: i64) -> Result<(), String> {
    if max_grade <= 0 || max_grade > MAX_GRADE_LIMIT {
        return Err(format!(
            "maxGrade must be between 1 and {MAX_GRADE_LIMIT}, got {max_grade}"
        ));
    }
    Ok(())
}

pub fn validate_grade(grade: i64) -> Result<(), String> {
    if !(0..=MAX_GRADE_LIMIT).contains(&grade) {
        return Err(format!(
            "Grade must be between 0 and {MAX_GRADE_LIMIT}, got {grade}"
        ));
    }
    Ok(())
}

/// 路径参数与请求体中的 ID 必须一致（请求体未携带 ID 时放行）
pub fn validate_path_id(path_id: &str, body_id: Option<&str>) -> Result<(), String> {
    match body_id {
        Some(id) if id != path_id => Err(format!(
            "ID in path ({path_id}) must match ID in body ({id})"
        )),
        _ => Ok(()),
    }
}
