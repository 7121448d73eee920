use serde::Deserialize;
use ts_rs::TS;

use super::entities::{Assignment, AssignmentStatus, AssignmentType, Submission};
use crate::models::common::serde_helpers::{deserialize_lenient_i64, null_as_default};

// 作业创建请求，新作业总是 upcoming 状态且没有提交
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    #[serde(alias = "subject_id")]
    pub subject_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "due_date")]
    pub due_date: String,
    #[serde(rename = "type", alias = "assignment_type")]
    pub assignment_type: AssignmentType,
    #[serde(alias = "max_grade", deserialize_with = "deserialize_lenient_i64")]
    pub max_grade: i64,
    #[serde(default)]
    pub criteria: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,
}

impl CreateAssignmentRequest {
    pub fn into_assignment(self) -> Assignment {
        Assignment {
            id: String::new(),
            title: self.title,
            subject_id: self.subject_id,
            description: self.description,
            due_date: self.due_date,
            assignment_type: self.assignment_type,
            status: AssignmentStatus::Upcoming,
            max_grade: self.max_grade,
            criteria: self.criteria,
            files: self.files,
            submissions: Vec::new(),
            appeal_deadline: None,
            has_appeal: false,
            grade: None,
            feedback: None,
        }
    }
}

// 作业整体更新请求
//
// submissions 未提供时沿用库中已有的值；hasAppeal 总是由最终的提交列表重新计算。
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct UpdateAssignmentRequest {
    pub id: Option<String>,
    pub title: String,
    pub subject_id: String,
    #[serde(default)]
    pub description: String,
    pub due_date: String,
    #[serde(rename = "type")]
    pub assignment_type: AssignmentType,
    pub status: AssignmentStatus,
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub max_grade: i64,
    #[serde(default)]
    pub criteria: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,
    pub submissions: Option<Vec<Submission>>,
    pub appeal_deadline: Option<String>,
}

impl UpdateAssignmentRequest {
    pub fn into_assignment(self, id: String, existing: Option<&Assignment>) -> Assignment {
        let submissions = self
            .submissions
            .or_else(|| existing.map(|a| a.submissions.clone()))
            .unwrap_or_default();
        let mut assignment = Assignment {
            id,
            title: self.title,
            subject_id: self.subject_id,
            description: self.description,
            due_date: self.due_date,
            assignment_type: self.assignment_type,
            status: self.status,
            max_grade: self.max_grade,
            criteria: self.criteria,
            files: self.files,
            submissions,
            appeal_deadline: self.appeal_deadline,
            has_appeal: false,
            grade: existing.and_then(|a| a.grade),
            feedback: existing.and_then(|a| a.feedback.clone()),
        };
        assignment.recompute_has_appeal();
        assignment
    }
}

// 学生提交作业请求，文件为已上传文件的地址
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct SubmitAssignmentRequest {
    #[serde(alias = "student_id")]
    pub student_id: String,
    #[serde(alias = "student_name")]
    pub student_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,
}

// 评分 / 申诉复核请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct GradeSubmissionRequest {
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub grade: i64,
    pub feedback: String,
}

// 申诉请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct CreateAppealRequest {
    pub reason: String,
}
