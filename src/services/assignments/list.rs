use std::collections::HashMap;

use chrono::Utc;

use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::responses::AssignmentListItem;
use crate::models::submissions::entities::{Submission, SubmissionStatus};

/// 学生视角的作业列表
///
/// 全部作业按截止时间排序，并结合该学生的提交推导进度徽章。
pub async fn list_with_badges(
    service: &AssignmentService,
    student_id: i64,
) -> Result<Vec<AssignmentListItem>> {
    let storage = service.storage();
    let assignments = storage.list_assignments().await?;
    let submissions = storage.list_submissions_by_student(student_id).await?;

    let mut submission_map: HashMap<i64, Submission> = submissions
        .into_iter()
        .map(|s| (s.assignment_id, s))
        .collect();

    let now = Utc::now();
    Ok(assignments
        .into_iter()
        .map(|assignment| {
            let submission = submission_map.remove(&assignment.id);
            let badge = assignment.progress_badge(submission.as_ref(), now);
            AssignmentListItem {
                assignment,
                badge,
                submission,
            }
        })
        .collect())
}

/// 某创建者的作业列表（截止时间排序）
pub async fn list_by_creator(
    service: &AssignmentService,
    creator_id: i64,
) -> Result<Vec<Assignment>> {
    service.storage().list_assignments_by_creator(creator_id).await
}

/// 某创建者作业下所有未评分的提交
pub async fn pending_submissions(
    service: &AssignmentService,
    creator_id: i64,
) -> Result<Vec<Submission>> {
    let storage = service.storage();
    let assignments = storage.list_assignments_by_creator(creator_id).await?;

    let mut pending = Vec::new();
    for assignment in &assignments {
        let submissions = storage.list_submissions_by_assignment(assignment.id).await?;
        pending.extend(
            submissions
                .into_iter()
                .filter(|s| s.status != SubmissionStatus::Graded),
        );
    }
    Ok(pending)
}
