use serde::Serialize;

use crate::models::assignments::entities::{Assignment, ProgressBadge};
use crate::models::submissions::entities::Submission;

/// 作业列表项（学生视角，含进度徽章）
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentListItem {
    pub assignment: Assignment,
    pub badge: ProgressBadge,
    pub submission: Option<Submission>,
}
