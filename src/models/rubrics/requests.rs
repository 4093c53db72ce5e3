use serde::Deserialize;

/// 创建评分标准请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCriterionRequest {
    pub assignment_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub max_points: i64,
}
