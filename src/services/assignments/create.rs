use tracing::{info, warn};

use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::rubrics::requests::CreateCriterionRequest;

/// 创建作业
///
/// 自动附带一条覆盖全部分值的默认评分标准，保证新作业立即可评分。
pub async fn create_assignment(
    service: &AssignmentService,
    created_by: i64,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    if !service.grading().is_known_category(&req.category) {
        warn!(
            "作业分类 {} 不在权重表中，汇总时将按 {} 计",
            req.category,
            service.grading().fallback_category
        );
    }

    let storage = service.storage();
    let assignment = storage.create_assignment(created_by, req).await?;

    storage
        .create_criterion(CreateCriterionRequest {
            assignment_id: assignment.id,
            title: "Overall Quality".to_string(),
            description: Some("Default rubric criterion".to_string()),
            max_points: assignment.points,
        })
        .await?;

    info!(
        "用户 {} 创建作业 {}（分类 {}，总分 {}）",
        created_by, assignment.id, assignment.category, assignment.points
    );

    Ok(assignment)
}
