use serde::Serialize;

use crate::models::grades::responses::GradeSummary;

/// 「我的课程」卡片
///
/// 系统课程与外部课程共用同一种卡片；外部课程没有 course_id，
/// 也不参与成绩汇总。
#[derive(Debug, Clone, Serialize)]
pub struct ClassCard {
    pub title: String,
    pub course_code: String,
    pub description: String,
    pub link: Option<String>,
    pub course_id: Option<i64>,
    pub grade_info: Option<GradeSummary>,
}
