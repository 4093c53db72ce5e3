use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricCriterion {
    // 唯一 ID
    pub id: i64,
    // 所属作业 ID
    pub assignment_id: i64,
    // 标准名称
    pub title: String,
    // 标准说明
    pub description: Option<String>,
    // 该项满分
    pub max_points: i64,
}
