use tracing::info;

use super::AssignmentService;
use crate::errors::Result;

/// 删除作业
///
/// 所属评分标准与提交级联删除。
pub async fn delete_assignment(service: &AssignmentService, assignment_id: i64) -> Result<bool> {
    let deleted = service.storage().delete_assignment(assignment_id).await?;
    if deleted {
        info!("作业 {} 已删除（含评分标准与提交）", assignment_id);
    }
    Ok(deleted)
}
