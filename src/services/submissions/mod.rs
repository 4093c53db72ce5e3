pub mod grade;
pub mod submit;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::{CreateSubmissionRequest, GradeSubmissionRequest};
use crate::storage::Storage;

/// 提交生命周期管理
///
/// 状态流转：未提交（无记录）-> Submitted -> Graded，没有终态锁。
/// 调用方的身份与角色校验由宿主应用完成，这里只执行数据规则
/// （作业是否接收提交、评分是否越界）。
pub struct SubmissionService {
    storage: Arc<dyn Storage>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 学生创建或覆盖提交
    pub async fn submit(
        &self,
        student_id: i64,
        assignment_id: i64,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        submit::submit(self, student_id, assignment_id, req).await
    }

    /// 按评分标准为提交评分
    pub async fn grade(
        &self,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Submission> {
        grade::grade(self, submission_id, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::models::rubrics::requests::CreateCriterionRequest;
    use crate::models::submissions::entities::SubmissionStatus;
    use crate::storage::memory::MemoryStorage;
    use chrono::{Duration, Utc};
    use std::collections::HashMap;

    async fn setup() -> (Arc<dyn Storage>, SubmissionService) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let service = SubmissionService::new(storage.clone());
        (storage, service)
    }

    async fn seed_assignment(
        storage: &Arc<dyn Storage>,
        allow_submissions: bool,
        criteria: &[(&str, i64)],
    ) -> (i64, Vec<i64>) {
        let assignment = storage
            .create_assignment(
                10,
                CreateAssignmentRequest {
                    title: "Problem Set 1".to_string(),
                    description: "Mechanics".to_string(),
                    course_id: Some(1),
                    category: "homework".to_string(),
                    points: criteria.iter().map(|(_, p)| p).sum(),
                    due_date: Utc::now() + Duration::days(7),
                    allow_submissions,
                },
            )
            .await
            .unwrap();

        let mut criterion_ids = Vec::new();
        for (title, max_points) in criteria {
            let criterion = storage
                .create_criterion(CreateCriterionRequest {
                    assignment_id: assignment.id,
                    title: title.to_string(),
                    description: None,
                    max_points: *max_points,
                })
                .await
                .unwrap();
            criterion_ids.push(criterion.id);
        }
        (assignment.id, criterion_ids)
    }

    fn content(text: &str) -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            content: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_creates_submitted_record() {
        let (storage, service) = setup().await;
        let (assignment_id, _) = seed_assignment(&storage, true, &[("Overall", 50)]).await;

        let submission = service.submit(2, assignment_id, content("v1")).await.unwrap();
        assert_eq!(submission.status, SubmissionStatus::Submitted);
        assert_eq!(submission.content.as_deref(), Some("v1"));
        assert!(submission.submitted_at.is_some());
        assert!(submission.score.is_none());
    }

    #[tokio::test]
    async fn test_submit_rejected_when_assignment_closed() {
        let (storage, service) = setup().await;
        let (assignment_id, _) = seed_assignment(&storage, false, &[("Overall", 50)]).await;

        let err = service.submit(2, assignment_id, content("v1")).await.unwrap_err();
        assert_eq!(err.code(), "E004");
        // 拒绝后不应产生记录
        assert!(storage.get_submission(assignment_id, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_grade_sums_criterion_scores() {
        let (storage, service) = setup().await;
        let (assignment_id, criterion_ids) =
            seed_assignment(&storage, true, &[("Correctness", 30), ("Style", 20)]).await;
        let submission = service.submit(2, assignment_id, content("v1")).await.unwrap();

        let scores = HashMap::from([(criterion_ids[0], 27), (criterion_ids[1], 18)]);
        let graded = service
            .grade(submission.id, GradeSubmissionRequest { scores })
            .await
            .unwrap();

        assert_eq!(graded.status, SubmissionStatus::Graded);
        assert_eq!(graded.score, Some(45));
        let rubric = graded.rubric_scores.unwrap();
        assert_eq!(rubric.get(criterion_ids[0]), Some(27));
        assert_eq!(rubric.get(criterion_ids[1]), Some(18));
        assert_eq!(rubric.total(), 45);
    }

    #[tokio::test]
    async fn test_grade_rejects_out_of_range_score_atomically() {
        let (storage, service) = setup().await;
        let (assignment_id, criterion_ids) =
            seed_assignment(&storage, true, &[("Correctness", 20), ("Style", 20)]).await;
        let submission = service.submit(2, assignment_id, content("v1")).await.unwrap();

        // 单项越界则整体拒绝，且报告该标准的名称
        let scores = HashMap::from([(criterion_ids[0], 999), (criterion_ids[1], 10)]);
        let err = service
            .grade(submission.id, GradeSubmissionRequest { scores })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E002");
        assert!(err.message().contains("Correctness"));

        // 先前状态保持不变
        let unchanged = storage.get_submission(assignment_id, 2).await.unwrap().unwrap();
        assert_eq!(unchanged.status, SubmissionStatus::Submitted);
        assert!(unchanged.score.is_none());
        assert!(unchanged.rubric_scores.is_none());
    }

    #[tokio::test]
    async fn test_grade_rejects_missing_criterion_score() {
        let (storage, service) = setup().await;
        let (assignment_id, criterion_ids) =
            seed_assignment(&storage, true, &[("Correctness", 20), ("Style", 20)]).await;
        let submission = service.submit(2, assignment_id, content("v1")).await.unwrap();

        let scores = HashMap::from([(criterion_ids[0], 15)]);
        let err = service
            .grade(submission.id, GradeSubmissionRequest { scores })
            .await
            .unwrap_err();
        assert!(err.message().contains("Style"));
    }

    #[tokio::test]
    async fn test_grade_backfills_submitted_at_only_when_unset() {
        let (storage, service) = setup().await;
        let (assignment_id, criterion_ids) = seed_assignment(&storage, true, &[("Overall", 50)]).await;

        // 教师直接评分从未提交的作业：由存储预置一条无时间戳的记录
        use crate::models::submissions::requests::SubmissionDraft;
        let bare = storage
            .upsert_submission(SubmissionDraft {
                assignment_id,
                student_id: 2,
                content: None,
                status: SubmissionStatus::Submitted,
                score: None,
                rubric_scores: None,
                submitted_at: None,
            })
            .await
            .unwrap();

        let scores = HashMap::from([(criterion_ids[0], 40)]);
        let graded = service
            .grade(bare.id, GradeSubmissionRequest { scores: scores.clone() })
            .await
            .unwrap();
        assert!(graded.submitted_at.is_some());

        // 已有时间戳则保持不变
        let submission = service.submit(3, assignment_id, content("v1")).await.unwrap();
        let before = submission.submitted_at.unwrap().timestamp();
        let regraded = service
            .grade(submission.id, GradeSubmissionRequest { scores })
            .await
            .unwrap();
        assert_eq!(regraded.submitted_at.unwrap().timestamp(), before);
    }

    #[tokio::test]
    async fn test_resubmission_clears_previous_grade() {
        let (storage, service) = setup().await;
        let (assignment_id, criterion_ids) = seed_assignment(&storage, true, &[("Overall", 50)]).await;

        let submission = service.submit(2, assignment_id, content("v1")).await.unwrap();
        let scores = HashMap::from([(criterion_ids[0], 45)]);
        service
            .grade(submission.id, GradeSubmissionRequest { scores })
            .await
            .unwrap();

        // 评分后重新提交：回到 Submitted，旧评分被清除等待重评
        let resubmitted = service.submit(2, assignment_id, content("v2")).await.unwrap();
        assert_eq!(resubmitted.id, submission.id);
        assert_eq!(resubmitted.status, SubmissionStatus::Submitted);
        assert_eq!(resubmitted.content.as_deref(), Some("v2"));
        assert!(resubmitted.score.is_none());
        assert!(resubmitted.rubric_scores.is_none());
    }
}
