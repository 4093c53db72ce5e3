use super::AssignmentService;
use crate::errors::{GradeSystemError, Result};
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::UpdateAssignmentRequest;

/// 更新作业字段（仅创建者可编辑，由调用方保证）
pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    req: UpdateAssignmentRequest,
) -> Result<Assignment> {
    service
        .storage()
        .update_assignment(assignment_id, req)
        .await?
        .ok_or_else(|| GradeSystemError::not_found(format!("作业不存在: {assignment_id}")))
}
