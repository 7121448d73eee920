use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::serde_helpers::{deserialize_lenient_i64, null_as_default};
use crate::storage::{Collection, Record};

// 作业类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub enum AssignmentType {
    Homework,
    Exam,
    Quiz,
}

// 作业状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub enum AssignmentStatus {
    Upcoming,
    Submitted,
    Graded,
}

// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub enum SubmissionStatus {
    Submitted,
    Graded,
}

// 申诉状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub enum AppealStatus {
    Pending,
    Reviewed,
}

/// 成绩申诉，挂在提交上，每个提交至多一个
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct Appeal {
    pub id: String,
    pub submission_id: String,
    pub reason: String,
    pub status: AppealStatus,
    pub created_at: String,
    pub original_grade: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
}

impl Appeal {
    pub fn is_pending(&self) -> bool {
        self.status == AppealStatus::Pending
    }
}

/// 学生提交，只存在于所属作业的 submissions 列表中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct Submission {
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    pub student_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,
    pub submitted_at: String,
    pub status: SubmissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeal: Option<Appeal>,
}

impl Submission {
    /// 是否可以发起申诉
    ///
    /// 沿用既有部署的判断方式：成绩为 0 与未评分同等对待。
    pub fn is_appealable(&self) -> bool {
        matches!(self.grade, Some(grade) if grade != 0)
    }

    pub fn has_pending_appeal(&self) -> bool {
        self.appeal.as_ref().is_some_and(Appeal::is_pending)
    }
}

/// 作业实体，拥有其全部提交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/education.ts")]
pub struct Assignment {
    #[serde(default)]
    pub id: String,
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
    #[serde(default, deserialize_with = "null_as_default")]
    pub submissions: Vec<Submission>,
    #[serde(default)]
    pub appeal_deadline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_appeal: bool,
    // 旧版数据中作业级别的成绩与评语，原样保留
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Record for Assignment {
    const COLLECTION: Collection = Collection::Assignments;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Assignment {
    pub fn find_submission(&self, submission_id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == submission_id)
    }

    /// 重新计算申诉标记：仅当本作业下仍有待处理申诉时为 true
    pub fn recompute_has_appeal(&mut self) {
        self.has_appeal = self.submissions.iter().any(Submission::has_pending_appeal);
    }
}
