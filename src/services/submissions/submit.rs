use chrono::Utc;
use tracing::info;

use super::SubmissionService;
use crate::errors::{GradeSystemError, Result};
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::submissions::requests::{CreateSubmissionRequest, SubmissionDraft};

/// 学生创建或覆盖提交
///
/// 仅在作业仍接收提交时允许；覆盖写入会把状态重置为 Submitted，
/// 同时清除已有的评分与各项得分，等待重新评分。已评分的记录
/// 不会出现「内容已更新、旧分数还在」的中间态。
pub async fn submit(
    service: &SubmissionService,
    student_id: i64,
    assignment_id: i64,
    req: CreateSubmissionRequest,
) -> Result<Submission> {
    let storage = service.storage();

    let assignment = storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| GradeSystemError::not_found(format!("作业不存在: {assignment_id}")))?;

    if !assignment.allow_submissions {
        return Err(GradeSystemError::submissions_closed(format!(
            "作业已停止接收提交: {}",
            assignment.title
        )));
    }

    let submission = storage
        .upsert_submission(SubmissionDraft {
            assignment_id,
            student_id,
            content: Some(req.content),
            status: SubmissionStatus::Submitted,
            score: None,
            rubric_scores: None,
            submitted_at: Some(Utc::now()),
        })
        .await?;

    info!(
        "学生 {} 提交作业 {}（提交 ID: {}）",
        student_id, assignment_id, submission.id
    );

    Ok(submission)
}
