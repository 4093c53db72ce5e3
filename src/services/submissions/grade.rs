use chrono::Utc;
use tracing::info;

use super::SubmissionService;
use crate::errors::{GradeSystemError, Result};
use crate::models::submissions::entities::{RubricScores, Submission, SubmissionStatus};
use crate::models::submissions::requests::{GradeSubmissionRequest, SubmissionDraft};

/// 按评分标准为提交评分
///
/// 作业的每个评分标准都必须给出 [0, max_points] 内的得分；
/// 任一标准不满足则整体拒绝，提交保持评分前的状态。
/// 全部通过后一次性写入：总分为各项之和，状态置为 Graded，
/// `submitted_at` 仅在此前为空时补记当前时间（教师直接评分
/// 从未提交的作业时）。
pub async fn grade(
    service: &SubmissionService,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> Result<Submission> {
    let storage = service.storage();

    let submission = storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| GradeSystemError::not_found(format!("提交不存在: {submission_id}")))?;

    let criteria = storage
        .list_criteria_by_assignment(submission.assignment_id)
        .await?;

    // 先校验全部标准，再执行唯一一次写入
    let mut rubric_scores = RubricScores::new();
    let mut total = 0i64;
    for criterion in &criteria {
        let score = req.scores.get(&criterion.id).copied().ok_or_else(|| {
            GradeSystemError::validation(format!("缺少评分标准的得分: {}", criterion.title))
        })?;
        if score < 0 || score > criterion.max_points {
            return Err(GradeSystemError::validation(format!(
                "得分超出范围 [0, {}]: {}",
                criterion.max_points, criterion.title
            )));
        }
        rubric_scores.insert(criterion.id, score);
        total += score;
    }

    let graded = storage
        .upsert_submission(SubmissionDraft {
            assignment_id: submission.assignment_id,
            student_id: submission.student_id,
            content: submission.content.clone(),
            status: SubmissionStatus::Graded,
            score: Some(total),
            rubric_scores: Some(rubric_scores),
            submitted_at: submission.submitted_at.or_else(|| Some(Utc::now())),
        })
        .await?;

    info!(
        "提交 {} 评分完成，总分 {}（{} 项标准）",
        submission_id,
        total,
        criteria.len()
    );

    Ok(graded)
}
