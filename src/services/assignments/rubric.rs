use tracing::warn;

use super::AssignmentService;
use crate::errors::{GradeSystemError, Result};
use crate::models::rubrics::{entities::RubricCriterion, requests::CreateCriterionRequest};

/// 为作业添加评分标准
///
/// 各项满分合计与作业总分的一致性是软约束：不一致时只告警不拒绝。
pub async fn add_criterion(
    service: &AssignmentService,
    req: CreateCriterionRequest,
) -> Result<RubricCriterion> {
    if req.max_points < 1 {
        return Err(GradeSystemError::validation(format!(
            "评分标准满分必须至少为 1: {}",
            req.title
        )));
    }

    let storage = service.storage();
    let assignment = storage
        .get_assignment_by_id(req.assignment_id)
        .await?
        .ok_or_else(|| {
            GradeSystemError::not_found(format!("作业不存在: {}", req.assignment_id))
        })?;

    let criterion = storage.create_criterion(req).await?;

    let criteria_total: i64 = storage
        .list_criteria_by_assignment(assignment.id)
        .await?
        .iter()
        .map(|c| c.max_points)
        .sum();
    if criteria_total != assignment.points {
        warn!(
            "作业 {} 的评分标准满分合计 {} 与作业总分 {} 不一致",
            assignment.id, criteria_total, assignment.points
        );
    }

    Ok(criterion)
}
