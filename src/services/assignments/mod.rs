pub mod create;
pub mod delete;
pub mod list;
pub mod rubric;
pub mod update;

use std::sync::Arc;

use crate::config::GradingConfig;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::models::assignments::responses::AssignmentListItem;
use crate::models::rubrics::{entities::RubricCriterion, requests::CreateCriterionRequest};
use crate::models::submissions::entities::Submission;
use crate::storage::Storage;

/// 作业与评分标准管理
pub struct AssignmentService {
    storage: Arc<dyn Storage>,
    grading: GradingConfig,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>, grading: GradingConfig) -> Self {
        Self { storage, grading }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn grading(&self) -> &GradingConfig {
        &self.grading
    }

    /// 创建作业并附带默认评分标准
    pub async fn create(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, created_by, req).await
    }

    /// 更新作业字段
    pub async fn update(
        &self,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        update::update_assignment(self, assignment_id, req).await
    }

    /// 删除作业（级联删除评分标准与提交）
    pub async fn delete(&self, assignment_id: i64) -> Result<bool> {
        delete::delete_assignment(self, assignment_id).await
    }

    /// 为作业添加评分标准
    pub async fn add_criterion(&self, req: CreateCriterionRequest) -> Result<RubricCriterion> {
        rubric::add_criterion(self, req).await
    }

    /// 学生视角的作业列表（截止时间排序，附进度徽章）
    pub async fn list_with_badges(&self, student_id: i64) -> Result<Vec<AssignmentListItem>> {
        list::list_with_badges(self, student_id).await
    }

    /// 某创建者的作业列表
    pub async fn list_by_creator(&self, creator_id: i64) -> Result<Vec<Assignment>> {
        list::list_by_creator(self, creator_id).await
    }

    /// 某创建者作业下所有未评分的提交（教师工作台）
    pub async fn pending_submissions(&self, creator_id: i64) -> Result<Vec<Submission>> {
        list::pending_submissions(self, creator_id).await
    }
}
