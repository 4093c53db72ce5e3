//! 评分标准存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::rubrics::{entities::RubricCriterion, requests::CreateCriterionRequest};

impl MemoryStorage {
    /// 创建评分标准
    pub async fn create_criterion_impl(
        &self,
        req: CreateCriterionRequest,
    ) -> Result<RubricCriterion> {
        let criterion = RubricCriterion {
            id: self.next_criterion_id(),
            assignment_id: req.assignment_id,
            title: req.title,
            description: req.description,
            max_points: req.max_points,
        };
        self.criteria.insert(criterion.id, criterion.clone());
        Ok(criterion)
    }

    /// 列出某作业的评分标准（按 ID 排序）
    pub async fn list_criteria_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<RubricCriterion>> {
        let mut criteria: Vec<RubricCriterion> = self
            .criteria
            .iter()
            .filter(|entry| entry.assignment_id == assignment_id)
            .map(|entry| entry.clone())
            .collect();
        criteria.sort_by_key(|c| c.id);
        Ok(criteria)
    }
}
