//! 内存存储实现
//!
//! 基于 DashMap 的进程内存储后端。提交表直接以
//! (assignment_id, student_id) 为键，同一对重复记录在结构上不可表示，
//! 并发 upsert 由分片锁串行化。

mod assignments;
mod courses;
mod enrollments;
mod rubrics;
mod submissions;

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use tracing::info;

use crate::errors::Result;
use crate::models::{
    assignments::entities::Assignment,
    assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    courses::{entities::Course, requests::CreateCourseRequest},
    enrollments::entities::EnrollmentRecord,
    rubrics::{entities::RubricCriterion, requests::CreateCriterionRequest},
    submissions::{entities::Submission, requests::SubmissionDraft},
};
use crate::storage::Storage;

/// 内存存储实现
pub struct MemoryStorage {
    courses: DashMap<i64, Course>,
    assignments: DashMap<i64, Assignment>,
    criteria: DashMap<i64, RubricCriterion>,
    // 键：(assignment_id, student_id)
    submissions: DashMap<(i64, i64), submissions::SubmissionRow>,
    // 提交 ID -> 主键，用于按 ID 查找
    submission_keys: DashMap<i64, (i64, i64)>,
    // 键：user_id
    enrollments: DashMap<i64, EnrollmentRecord>,

    course_seq: AtomicI64,
    assignment_seq: AtomicI64,
    criterion_seq: AtomicI64,
    submission_seq: AtomicI64,
    enrollment_seq: AtomicI64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        info!("内存存储初始化完成");
        Self {
            courses: DashMap::new(),
            assignments: DashMap::new(),
            criteria: DashMap::new(),
            submissions: DashMap::new(),
            submission_keys: DashMap::new(),
            enrollments: DashMap::new(),
            course_seq: AtomicI64::new(1),
            assignment_seq: AtomicI64::new(1),
            criterion_seq: AtomicI64::new(1),
            submission_seq: AtomicI64::new(1),
            enrollment_seq: AtomicI64::new(1),
        }
    }

    pub(crate) fn next_course_id(&self) -> i64 {
        self.course_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn next_assignment_id(&self) -> i64 {
        self.assignment_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn next_criterion_id(&self) -> i64 {
        self.criterion_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn next_submission_id(&self) -> i64 {
        self.submission_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn next_enrollment_id(&self) -> i64 {
        self.enrollment_seq.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

// Storage trait 实现
#[async_trait::async_trait]
impl Storage for MemoryStorage {
    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn get_course_by_code(&self, course_code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(course_code).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(assignment_id, update).await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        self.list_assignments_impl().await
    }

    async fn list_assignments_by_course(&self, course_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_course_impl(course_id).await
    }

    async fn list_assignments_by_creator(&self, creator_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_creator_impl(creator_id).await
    }

    // 评分标准模块
    async fn create_criterion(&self, criterion: CreateCriterionRequest) -> Result<RubricCriterion> {
        self.create_criterion_impl(criterion).await
    }

    async fn list_criteria_by_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<RubricCriterion>> {
        self.list_criteria_by_assignment_impl(assignment_id).await
    }

    // 提交模块
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn get_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_impl(assignment_id, student_id).await
    }

    async fn list_submissions_by_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_by_assignment_impl(assignment_id).await
    }

    async fn list_submissions_by_student(&self, student_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_student_impl(student_id).await
    }

    async fn list_graded_submissions(
        &self,
        assignment_ids: &[i64],
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        self.list_graded_submissions_impl(assignment_ids, student_id)
            .await
    }

    async fn upsert_submission(&self, draft: SubmissionDraft) -> Result<Submission> {
        self.upsert_submission_impl(draft).await
    }

    // 选课记录模块
    async fn get_enrollment_by_user(&self, user_id: i64) -> Result<Option<EnrollmentRecord>> {
        self.get_enrollment_by_user_impl(user_id).await
    }

    async fn set_enrollment(
        &self,
        user_id: i64,
        entries: Vec<serde_json::Value>,
    ) -> Result<EnrollmentRecord> {
        self.set_enrollment_impl(user_id, entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submissions::entities::{RubricScores, SubmissionStatus};
    use chrono::{Duration, Utc};
    use serde_json::json;

    fn assignment_request(course_id: Option<i64>, category: &str, points: i64) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            title: "Problem Set".to_string(),
            description: "description".to_string(),
            course_id,
            category: category.to_string(),
            points,
            due_date: Utc::now() + Duration::days(7),
            allow_submissions: true,
        }
    }

    fn draft(assignment_id: i64, student_id: i64, status: SubmissionStatus) -> SubmissionDraft {
        SubmissionDraft {
            assignment_id,
            student_id,
            content: Some("answer".to_string()),
            status,
            score: None,
            rubric_scores: None,
            submitted_at: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn test_upsert_keeps_one_row_per_pair() {
        let storage = MemoryStorage::new();
        let assignment = storage.create_assignment_impl(10, assignment_request(Some(1), "homework", 50)).await.unwrap();

        let first = storage.upsert_submission_impl(draft(assignment.id, 2, SubmissionStatus::Submitted)).await.unwrap();
        let second = storage.upsert_submission_impl(draft(assignment.id, 2, SubmissionStatus::Submitted)).await.unwrap();

        // 覆盖而不是新增，ID 保持稳定
        assert_eq!(first.id, second.id);
        let rows = storage.list_submissions_by_assignment_impl(assignment.id).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_rubric_scores_survive_storage_round_trip() {
        let storage = MemoryStorage::new();
        let assignment = storage.create_assignment_impl(10, assignment_request(Some(1), "homework", 50)).await.unwrap();

        let mut scores = RubricScores::new();
        scores.insert(3, 20);
        scores.insert(11, 25);
        let mut graded = draft(assignment.id, 2, SubmissionStatus::Graded);
        graded.score = Some(45);
        graded.rubric_scores = Some(scores.clone());
        storage.upsert_submission_impl(graded).await.unwrap();

        let stored = storage.get_submission_impl(assignment.id, 2).await.unwrap().unwrap();
        // 行内编码是文本键，读回后键恢复为数值 ID
        assert_eq!(stored.rubric_scores, Some(scores));
        assert_eq!(stored.score, Some(45));
    }

    #[tokio::test]
    async fn test_delete_assignment_cascades() {
        let storage = MemoryStorage::new();
        let assignment = storage.create_assignment_impl(10, assignment_request(Some(1), "homework", 50)).await.unwrap();
        storage.create_criterion_impl(CreateCriterionRequest {
            assignment_id: assignment.id,
            title: "Correctness".to_string(),
            description: None,
            max_points: 50,
        }).await.unwrap();
        let submission = storage.upsert_submission_impl(draft(assignment.id, 2, SubmissionStatus::Submitted)).await.unwrap();

        assert!(storage.delete_assignment_impl(assignment.id).await.unwrap());

        assert!(storage.get_assignment_by_id_impl(assignment.id).await.unwrap().is_none());
        assert!(storage.list_criteria_by_assignment_impl(assignment.id).await.unwrap().is_empty());
        assert!(storage.get_submission_by_id_impl(submission.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_graded_filter_scopes_by_status_and_assignment_set() {
        let storage = MemoryStorage::new();
        let a1 = storage.create_assignment_impl(10, assignment_request(Some(1), "homework", 50)).await.unwrap();
        let a2 = storage.create_assignment_impl(10, assignment_request(Some(1), "exam", 50)).await.unwrap();
        let a3 = storage.create_assignment_impl(10, assignment_request(Some(2), "homework", 50)).await.unwrap();

        let mut graded = draft(a1.id, 2, SubmissionStatus::Graded);
        graded.score = Some(40);
        storage.upsert_submission_impl(graded).await.unwrap();
        storage.upsert_submission_impl(draft(a2.id, 2, SubmissionStatus::Submitted)).await.unwrap();
        let mut other_course = draft(a3.id, 2, SubmissionStatus::Graded);
        other_course.score = Some(30);
        storage.upsert_submission_impl(other_course).await.unwrap();
        storage.upsert_submission_impl(draft(a1.id, 3, SubmissionStatus::Submitted)).await.unwrap();

        let graded = storage.list_graded_submissions_impl(&[a1.id, a2.id], 2).await.unwrap();
        assert_eq!(graded.len(), 1);
        assert_eq!(graded[0].assignment_id, a1.id);
    }

    #[tokio::test]
    async fn test_course_code_must_be_unique() {
        let storage = MemoryStorage::new();
        let request = CreateCourseRequest {
            course_name: "Physics".to_string(),
            course_code: "PHYS101".to_string(),
            description: None,
        };
        storage.create_course_impl(request.clone()).await.unwrap();
        assert!(storage.create_course_impl(request).await.is_err());
    }

    #[tokio::test]
    async fn test_set_enrollment_overwrites_existing_record() {
        let storage = MemoryStorage::new();
        let first = storage.set_enrollment_impl(2, vec![json!(1)]).await.unwrap();
        let second = storage.set_enrollment_impl(2, vec![json!(1), json!(3)]).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.entries.len(), 2);

        let fetched = storage.get_enrollment_by_user_impl(2).await.unwrap().unwrap();
        assert_eq!(fetched.entries.len(), 2);
    }
}
