use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::submissions::entities::{RubricScores, SubmissionStatus};

/// 学生创建/覆盖提交请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmissionRequest {
    pub content: String,
}

/// 评分请求：评分标准 ID -> 得分
///
/// 作业的每个评分标准都必须给出得分，缺失或越界将整体拒绝。
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmissionRequest {
    pub scores: HashMap<i64, i64>,
}

/// 提交写入请求
///
/// 存储层以 (assignment_id, student_id) 为键执行 upsert，
/// 同一键并发写入也不会产生第二条记录。
#[derive(Debug, Clone)]
pub struct SubmissionDraft {
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: Option<String>,
    pub status: SubmissionStatus,
    pub score: Option<i64>,
    pub rubric_scores: Option<RubricScores>,
    pub submitted_at: Option<DateTime<Utc>>,
}
