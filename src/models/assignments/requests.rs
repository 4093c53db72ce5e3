use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub course_id: Option<i64>, // None 表示通用作业
    pub category: String,
    pub points: i64,
    pub due_date: DateTime<Utc>, // ISO 8601 格式，如 "2026-09-01T12:00:00Z"
    pub allow_submissions: bool,
}

/// 更新作业请求（仅创建者可编辑）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub course_id: Option<Option<i64>>,
    pub category: Option<String>,
    pub points: Option<i64>,
    pub due_date: Option<DateTime<Utc>>,
    pub allow_submissions: Option<bool>,
}
