use std::collections::BTreeSet;

use tracing::info;

use super::EnrollmentService;
use crate::errors::Result;
use crate::models::enrollments::entities::EnrollmentRecord;

/// 解析用户可见的系统课程 ID 集合
///
/// 条目级归一化见 `EnrollmentEntry::from_value`；没有选课记录
/// 等同于空集，不是错误。
pub async fn course_ids(service: &EnrollmentService, user_id: i64) -> Result<BTreeSet<i64>> {
    let record = service.storage().get_enrollment_by_user(user_id).await?;
    Ok(record.map(|r| r.course_ids()).unwrap_or_default())
}

/// 覆盖用户的选课记录
pub async fn set_enrollment(
    service: &EnrollmentService,
    user_id: i64,
    entries: Vec<serde_json::Value>,
) -> Result<EnrollmentRecord> {
    let record = service.storage().set_enrollment(user_id, entries).await?;
    info!("用户 {} 的选课记录已更新（{} 个条目）", user_id, record.entries.len());
    Ok(record)
}
