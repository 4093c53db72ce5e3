use std::sync::Arc;

use crate::models::{
    assignments::entities::Assignment,
    assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    courses::{entities::Course, requests::CreateCourseRequest},
    enrollments::entities::EnrollmentRecord,
    rubrics::{entities::RubricCriterion, requests::CreateCriterionRequest},
    submissions::{entities::Submission, requests::SubmissionDraft},
};

use crate::errors::Result;

pub mod memory;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过 ID 获取课程
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 通过课程代码获取课程
    async fn get_course_by_code(&self, course_code: &str) -> Result<Option<Course>>;
    // 列出课程（按名称排序）
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(
        &self,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过 ID 获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 更新作业
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业，级联删除评分标准与提交
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;
    // 列出全部作业（按截止时间排序）
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;
    // 列出某课程的作业
    async fn list_assignments_by_course(&self, course_id: i64) -> Result<Vec<Assignment>>;
    // 列出某创建者的作业
    async fn list_assignments_by_creator(&self, creator_id: i64) -> Result<Vec<Assignment>>;

    /// 评分标准管理方法
    // 创建评分标准
    async fn create_criterion(&self, criterion: CreateCriterionRequest) -> Result<RubricCriterion>;
    // 列出某作业的评分标准
    async fn list_criteria_by_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<RubricCriterion>>;

    /// 提交管理方法
    // 通过 ID 获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 获取某学生对某作业的提交（每对至多一条）
    async fn get_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 列出某作业的全部提交
    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    // 列出某学生的全部提交
    async fn list_submissions_by_student(&self, student_id: i64) -> Result<Vec<Submission>>;
    // 列出某学生在一组作业中已评分的提交
    async fn list_graded_submissions(
        &self,
        assignment_ids: &[i64],
        student_id: i64,
    ) -> Result<Vec<Submission>>;
    // 以 (assignment_id, student_id) 为键写入提交
    async fn upsert_submission(&self, draft: SubmissionDraft) -> Result<Submission>;

    /// 选课记录管理方法
    // 获取用户的选课记录
    async fn get_enrollment_by_user(&self, user_id: i64) -> Result<Option<EnrollmentRecord>>;
    // 覆盖用户的选课记录
    async fn set_enrollment(
        &self,
        user_id: i64,
        entries: Vec<serde_json::Value>,
    ) -> Result<EnrollmentRecord>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = memory::MemoryStorage::new();
    Ok(Arc::new(storage))
}
