//! 提交、评分与申诉的状态流转
//!
//! 提交内嵌在所属作业记录中，每个操作都读取整个作业集合、在内存中修改后整体写回。
//!
//! ```text
//! [无提交] --submit--> submitted --grade--> graded --appeal--> graded+pending --review--> graded+reviewed
//! ```
//!
//! 读改写之间没有加锁，并发写入同一集合时后写者覆盖先写者。

use tracing::info;

use super::RecordStore;
use crate::errors::{GradiatorError, Result};
use crate::models::assignments::entities::{
    Appeal, AppealStatus, Assignment, AssignmentStatus, Submission, SubmissionStatus,
};
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::utils::time::now_timestamp;

fn new_submission_id() -> String {
    format!("sub_{}", uuid::Uuid::new_v4())
}

fn new_appeal_id() -> String {
    format!("appeal_{}", uuid::Uuid::new_v4())
}

/// 在所有作业中定位提交，返回 (作业下标, 提交下标)
fn locate_submission(assignments: &[Assignment], submission_id: &str) -> Option<(usize, usize)> {
    assignments.iter().enumerate().find_map(|(i, assignment)| {
        assignment
            .submissions
            .iter()
            .position(|s| s.id == submission_id)
            .map(|j| (i, j))
    })
}

/// 追加一份新提交，并把作业状态置为 submitted
pub fn apply_submit(
    assignments: &mut [Assignment],
    assignment_id: &str,
    request: SubmitAssignmentRequest,
    now: &str,
) -> Result<Submission> {
    let assignment = assignments
        .iter_mut()
        .find(|a| a.id == assignment_id)
        .ok_or_else(|| {
            GradiatorError::not_found(format!("Assignment with ID {assignment_id} not found"))
        })?;

    let submission = Submission {
        id: new_submission_id(),
        assignment_id: assignment_id.to_string(),
        student_id: request.student_id,
        student_name: request.student_name,
        files: request.files,
        submitted_at: now.to_string(),
        status: SubmissionStatus::Submitted,
        grade: None,
        feedback: None,
        appeal: None,
    };

    assignment.submissions.push(submission.clone());
    assignment.status = AssignmentStatus::Submitted;
    Ok(submission)
}

/// 写入成绩；作业级状态随最近一次评分变为 graded
pub fn apply_grade(
    assignments: &mut [Assignment],
    submission_id: &str,
    grade: i64,
    feedback: String,
) -> Result<Submission> {
    let (i, j) = locate_submission(assignments, submission_id).ok_or_else(|| {
        GradiatorError::not_found(format!("Submission with ID {submission_id} not found"))
    })?;

    let assignment = &mut assignments[i];
    assignment.status = AssignmentStatus::Graded;

    let submission = &mut assignment.submissions[j];
    submission.grade = Some(grade);
    submission.feedback = Some(feedback);
    submission.status = SubmissionStatus::Graded;
    Ok(submission.clone())
}

/// 对已评分的提交发起申诉
pub fn apply_appeal(
    assignments: &mut [Assignment],
    submission_id: &str,
    reason: String,
    now: &str,
) -> Result<Appeal> {
    let (i, j) = locate_submission(assignments, submission_id).ok_or_else(|| {
        GradiatorError::not_found(format!("Submission with ID {submission_id} not found"))
    })?;

    let assignment = &mut assignments[i];
    let submission = &mut assignment.submissions[j];

    let original_grade = match submission.grade {
        Some(grade) if submission.is_appealable() => grade,
        _ => {
            return Err(GradiatorError::invalid_state(
                "Cannot appeal a submission that hasn't been graded",
            ));
        }
    };

    let appeal = Appeal {
        id: new_appeal_id(),
        submission_id: submission_id.to_string(),
        reason,
        status: AppealStatus::Pending,
        created_at: now.to_string(),
        original_grade,
        reviewed_at: None,
    };

    submission.appeal = Some(appeal.clone());
    assignment.has_appeal = true;
    Ok(appeal)
}

/// 复核申诉：覆盖成绩，标记申诉已处理，并只在本作业范围内重算 hasAppeal
pub fn apply_review_appeal(
    assignments: &mut [Assignment],
    submission_id: &str,
    new_grade: i64,
    feedback: String,
    now: &str,
) -> Result<Submission> {
    let (i, j) = assignments
        .iter()
        .enumerate()
        .find_map(|(i, assignment)| {
            assignment
                .submissions
                .iter()
                .position(|s| s.id == submission_id && s.appeal.is_some())
                .map(|j| (i, j))
        })
        .ok_or_else(|| {
            GradiatorError::not_found(format!(
                "Submission with ID {submission_id} not found or has no appeal"
            ))
        })?;

    let assignment = &mut assignments[i];
    let submission = &mut assignment.submissions[j];
    submission.grade = Some(new_grade);
    submission.feedback = Some(feedback);
    if let Some(appeal) = submission.appeal.as_mut() {
        appeal.status = AppealStatus::Reviewed;
        appeal.reviewed_at = Some(now.to_string());
    }
    let updated = submission.clone();

    assignment.recompute_has_appeal();
    Ok(updated)
}

impl RecordStore {
    /// 提交作业（非幂等，重复调用会产生多份提交）
    pub async fn submit_assignment(
        &self,
        assignment_id: &str,
        request: SubmitAssignmentRequest,
    ) -> Result<Submission> {
        let mut assignments = self.list::<Assignment>().await?;
        let submission = apply_submit(&mut assignments, assignment_id, request, &now_timestamp())?;
        self.replace_all(&assignments).await?;

        info!(
            "Student {} submitted assignment {} as {}",
            submission.student_id, assignment_id, submission.id
        );
        Ok(submission)
    }

    /// 评分，可重复评分覆盖
    pub async fn grade_submission(
        &self,
        submission_id: &str,
        grade: i64,
        feedback: String,
    ) -> Result<Submission> {
        let mut assignments = self.list::<Assignment>().await?;
        let submission = apply_grade(&mut assignments, submission_id, grade, feedback)?;
        self.replace_all(&assignments).await?;

        info!("Submission {} graded with {}", submission_id, grade);
        Ok(submission)
    }

    /// 发起申诉
    pub async fn submit_appeal(&self, submission_id: &str, reason: String) -> Result<Appeal> {
        let mut assignments = self.list::<Assignment>().await?;
        let appeal = apply_appeal(&mut assignments, submission_id, reason, &now_timestamp())?;
        self.replace_all(&assignments).await?;

        info!("Appeal {} filed for submission {}", appeal.id, submission_id);
        Ok(appeal)
    }

    /// 复核申诉
    pub async fn review_appeal(
        &self,
        submission_id: &str,
        new_grade: i64,
        feedback: String,
    ) -> Result<Submission> {
        let mut assignments = self.list::<Assignment>().await?;
        let submission = apply_review_appeal(
            &mut assignments,
            submission_id,
            new_grade,
            feedback,
            &now_timestamp(),
        )?;
        self.replace_all(&assignments).await?;

        info!(
            "Appeal on submission {} reviewed, grade now {}",
            submission_id, new_grade
        );
        Ok(submission)
    }

    /// 在所有作业中查找提交
    pub async fn get_submission(&self, submission_id: &str) -> Result<Option<Submission>> {
        let assignments = self.list::<Assignment>().await?;
        Ok(assignments
            .iter()
            .find_map(|a| a.find_submission(submission_id))
            .cloned())
    }

    /// 作业下的全部提交；作业不存在时返回空列表
    pub async fn list_submissions_for_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<Submission>> {
        Ok(self
            .get::<Assignment>(assignment_id)
            .await?
            .map(|a| a.submissions)
            .unwrap_or_default())
    }

    /// 某学生在所有作业中的提交，按存储顺序
    pub async fn list_submissions_by_student(&self, student_id: &str) -> Result<Vec<Submission>> {
        let assignments = self.list::<Assignment>().await?;
        Ok(assignments
            .into_iter()
            .flat_map(|a| a.submissions)
            .filter(|s| s.student_id == student_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::AssignmentType;
    use crate::storage::memory_storage::MemoryStorage;
    use std::sync::Arc;

    const NOW: &str = "2025-03-01T10:00:00+00:00";

    fn assignment(id: &str) -> Assignment {
        Assignment {
            id: id.to_string(),
            title: format!("Assignment {id}"),
            subject_id: "s1".to_string(),
            description: String::new(),
            due_date: "2025-03-15".to_string(),
            assignment_type: AssignmentType::Homework,
            status: AssignmentStatus::Upcoming,
            max_grade: 100,
            criteria: None,
            files: Vec::new(),
            submissions: Vec::new(),
            appeal_deadline: None,
            has_appeal: false,
            grade: None,
            feedback: None,
        }
    }

    fn submit_req(student: &str) -> SubmitAssignmentRequest {
        SubmitAssignmentRequest {
            student_id: student.to_string(),
            student_name: format!("Student {student}"),
            files: vec![format!("/uploads/{student}.jpg")],
        }
    }

    async fn store_with(assignments: Vec<Assignment>) -> RecordStore {
        let store = RecordStore::new(Arc::new(MemoryStorage::new()));
        store.replace_all(&assignments).await.unwrap();
        store
    }

    #[test]
    fn test_submit_unknown_assignment_not_found() {
        let mut assignments = vec![assignment("a1")];
        let err = apply_submit(&mut assignments, "missing", submit_req("st1"), NOW).unwrap_err();
        assert!(err.is_not_found());
        assert!(assignments[0].submissions.is_empty());
        assert_eq!(assignments[0].status, AssignmentStatus::Upcoming);
    }

    #[test]
    fn test_submit_twice_creates_distinct_submissions() {
        let mut assignments = vec![assignment("a1")];
        let first = apply_submit(&mut assignments, "a1", submit_req("st1"), NOW).unwrap();
        let second = apply_submit(&mut assignments, "a1", submit_req("st1"), NOW).unwrap();

        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("sub_"));
        assert_eq!(assignments[0].submissions.len(), 2);
        assert_eq!(first.assignment_id, "a1");
        assert_eq!(first.submitted_at, NOW);
    }

    #[test]
    fn test_grade_unknown_submission_not_found() {
        let mut assignments = vec![assignment("a1")];
        let err = apply_grade(&mut assignments, "sub_missing", 50, "ok".into()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_regrade_overwrites() {
        let mut assignments = vec![assignment("a1")];
        let sub = apply_submit(&mut assignments, "a1", submit_req("st1"), NOW).unwrap();
        apply_grade(&mut assignments, &sub.id, 60, "first".into()).unwrap();
        let graded = apply_grade(&mut assignments, &sub.id, 75, "second".into()).unwrap();

        assert_eq!(graded.grade, Some(75));
        assert_eq!(graded.feedback.as_deref(), Some("second"));
    }

    #[test]
    fn test_grading_sets_assignment_status_from_latest_grade() {
        let mut assignments = vec![assignment("a1")];
        let s1 = apply_submit(&mut assignments, "a1", submit_req("st1"), NOW).unwrap();
        apply_grade(&mut assignments, &s1.id, 80, "ok".into()).unwrap();
        // 另一名学生提交后作业级状态回到 submitted
        apply_submit(&mut assignments, "a1", submit_req("st2"), NOW).unwrap();
        assert_eq!(assignments[0].status, AssignmentStatus::Submitted);

        apply_grade(&mut assignments, &s1.id, 82, "again".into()).unwrap();
        assert_eq!(assignments[0].status, AssignmentStatus::Graded);
    }

    #[test]
    fn test_appeal_ungraded_is_invalid_state() {
        let mut assignments = vec![assignment("a1")];
        let sub = apply_submit(&mut assignments, "a1", submit_req("st1"), NOW).unwrap();

        let err = apply_appeal(&mut assignments, &sub.id, "why".into(), NOW).unwrap_err();
        assert!(err.is_invalid_state());
        assert!(!assignments[0].has_appeal);
        assert!(assignments[0].submissions[0].appeal.is_none());
    }

    #[test]
    fn test_appeal_zero_grade_is_treated_as_ungraded() {
        let mut assignments = vec![assignment("a1")];
        let sub = apply_submit(&mut assignments, "a1", submit_req("st1"), NOW).unwrap();
        apply_grade(&mut assignments, &sub.id, 0, "blank page".into()).unwrap();

        let err = apply_appeal(&mut assignments, &sub.id, "I wrote something".into(), NOW)
            .unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_appeal_unknown_submission_not_found() {
        let mut assignments = vec![assignment("a1")];
        let err = apply_appeal(&mut assignments, "sub_x", "why".into(), NOW).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_review_without_appeal_not_found() {
        let mut assignments = vec![assignment("a1")];
        let sub = apply_submit(&mut assignments, "a1", submit_req("st1"), NOW).unwrap();
        apply_grade(&mut assignments, &sub.id, 70, "ok".into()).unwrap();

        let err = apply_review_appeal(&mut assignments, &sub.id, 80, "re".into(), NOW).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(assignments[0].submissions[0].grade, Some(70));
    }

    #[test]
    fn test_has_appeal_stays_true_while_another_pending() {
        let mut assignments = vec![assignment("a1")];
        let s1 = apply_submit(&mut assignments, "a1", submit_req("st1"), NOW).unwrap();
        let s2 = apply_submit(&mut assignments, "a1", submit_req("st2"), NOW).unwrap();
        apply_grade(&mut assignments, &s1.id, 70, "ok".into()).unwrap();
        apply_grade(&mut assignments, &s2.id, 65, "ok".into()).unwrap();
        apply_appeal(&mut assignments, &s1.id, "step 2".into(), NOW).unwrap();
        apply_appeal(&mut assignments, &s2.id, "step 4".into(), NOW).unwrap();

        apply_review_appeal(&mut assignments, &s1.id, 75, "fixed".into(), NOW).unwrap();
        assert!(assignments[0].has_appeal);

        apply_review_appeal(&mut assignments, &s2.id, 68, "fixed".into(), NOW).unwrap();
        assert!(!assignments[0].has_appeal);
    }

    #[test]
    fn test_review_scope_is_owning_assignment_only() {
        let mut assignments = vec![assignment("a1"), assignment("a2")];
        let s1 = apply_submit(&mut assignments, "a1", submit_req("st1"), NOW).unwrap();
        let s2 = apply_submit(&mut assignments, "a2", submit_req("st1"), NOW).unwrap();
        apply_grade(&mut assignments, &s1.id, 70, "ok".into()).unwrap();
        apply_grade(&mut assignments, &s2.id, 70, "ok".into()).unwrap();
        apply_appeal(&mut assignments, &s1.id, "a".into(), NOW).unwrap();
        apply_appeal(&mut assignments, &s2.id, "b".into(), NOW).unwrap();

        apply_review_appeal(&mut assignments, &s1.id, 72, "re".into(), NOW).unwrap();
        assert!(!assignments[0].has_appeal);
        assert!(assignments[1].has_appeal);
    }

    #[actix_web::test]
    async fn test_full_lifecycle_scenario() {
        let store = store_with(vec![assignment("A")]).await;

        let s1 = store.submit_assignment("A", submit_req("student1")).await.unwrap();
        let a: Assignment = store.get("A").await.unwrap().unwrap();
        assert_eq!(a.status, AssignmentStatus::Submitted);
        assert_eq!(a.submissions.len(), 1);

        let graded = store
            .grade_submission(&s1.id, 85, "Good work".into())
            .await
            .unwrap();
        assert_eq!(graded.status, SubmissionStatus::Graded);
        assert_eq!(graded.grade, Some(85));
        let a: Assignment = store.get("A").await.unwrap().unwrap();
        assert_eq!(a.status, AssignmentStatus::Graded);

        let appeal = store
            .submit_appeal(&s1.id, "Miscounted step 3".into())
            .await
            .unwrap();
        assert_eq!(appeal.status, AppealStatus::Pending);
        assert_eq!(appeal.original_grade, 85);
        assert_eq!(appeal.submission_id, s1.id);
        assert!(appeal.id.starts_with("appeal_"));
        let a: Assignment = store.get("A").await.unwrap().unwrap();
        assert!(a.has_appeal);

        let reviewed = store
            .review_appeal(&s1.id, 90, "Reassessed".into())
            .await
            .unwrap();
        assert_eq!(reviewed.grade, Some(90));
        assert_eq!(reviewed.feedback.as_deref(), Some("Reassessed"));
        let reviewed_appeal = reviewed.appeal.unwrap();
        assert_eq!(reviewed_appeal.status, AppealStatus::Reviewed);
        assert!(reviewed_appeal.reviewed_at.is_some());
        let a: Assignment = store.get("A").await.unwrap().unwrap();
        assert!(!a.has_appeal);
    }

    #[actix_web::test]
    async fn test_submit_missing_assignment_leaves_store_untouched() {
        let store = store_with(vec![assignment("A")]).await;
        let before: Vec<Assignment> = store.list().await.unwrap();

        let err = store
            .submit_assignment("nope", submit_req("student1"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let after: Vec<Assignment> = store.list().await.unwrap();
        assert_eq!(before, after);
    }

    #[actix_web::test]
    async fn test_submission_queries() {
        let store = store_with(vec![assignment("A"), assignment("B")]).await;
        let s1 = store.submit_assignment("A", submit_req("st1")).await.unwrap();
        store.submit_assignment("A", submit_req("st2")).await.unwrap();
        let s3 = store.submit_assignment("B", submit_req("st1")).await.unwrap();

        let found = store.get_submission(&s3.id).await.unwrap().unwrap();
        assert_eq!(found.assignment_id, "B");
        assert!(store.get_submission("sub_missing").await.unwrap().is_none());

        let for_a = store.list_submissions_for_assignment("A").await.unwrap();
        assert_eq!(for_a.len(), 2);
        assert!(
            store
                .list_submissions_for_assignment("Z")
                .await
                .unwrap()
                .is_empty()
        );

        let by_student = store.list_submissions_by_student("st1").await.unwrap();
        let ids: Vec<&str> = by_student.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![s1.id.as_str(), s3.id.as_str()]);
    }
}
