//! 提交存储操作
//!
//! 行内的 `rubric_scores` 以文本键 JSON 存放（对齐只支持文本键的
//! 存储编码），读写时在此边界完成与数值 ID 的无损转换。

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::SubmissionDraft,
};
use dashmap::mapref::entry::Entry;

/// 内部行格式，模拟文本列的存储编码
#[derive(Debug, Clone)]
pub(crate) struct SubmissionRow {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: Option<String>,
    pub status: String,
    pub score: Option<i64>,
    // JSON 文本，键为字符串形式的评分标准 ID
    pub rubric_scores: Option<String>,
    pub submitted_at: Option<i64>,
}

fn draft_to_row(id: i64, draft: &SubmissionDraft) -> Result<SubmissionRow> {
    let rubric_scores = draft
        .rubric_scores
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    Ok(SubmissionRow {
        id,
        assignment_id: draft.assignment_id,
        student_id: draft.student_id,
        content: draft.content.clone(),
        status: draft.status.to_string(),
        score: draft.score,
        rubric_scores,
        submitted_at: draft.submitted_at.map(|t| t.timestamp()),
    })
}

fn row_to_submission(row: &SubmissionRow) -> Result<Submission> {
    let rubric_scores = row
        .rubric_scores
        .as_deref()
        .map(serde_json::from_str)
        .transpose()?;

    Ok(Submission {
        id: row.id,
        assignment_id: row.assignment_id,
        student_id: row.student_id,
        content: row.content.clone(),
        status: row.status.parse()?,
        score: row.score,
        rubric_scores,
        submitted_at: row
            .submitted_at
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0)),
    })
}

impl MemoryStorage {
    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        let Some(key) = self.submission_keys.get(&submission_id).map(|k| *k) else {
            return Ok(None);
        };
        match self.submissions.get(&key) {
            Some(row) => Ok(Some(row_to_submission(&row)?)),
            None => Ok(None),
        }
    }

    /// 获取某学生对某作业的提交
    pub async fn get_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        match self.submissions.get(&(assignment_id, student_id)) {
            Some(row) => Ok(Some(row_to_submission(&row)?)),
            None => Ok(None),
        }
    }

    /// 列出某作业的全部提交
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        self.submissions
            .iter()
            .filter(|entry| entry.key().0 == assignment_id)
            .map(|entry| row_to_submission(&entry))
            .collect()
    }

    /// 列出某学生的全部提交
    pub async fn list_submissions_by_student_impl(&self, student_id: i64) -> Result<Vec<Submission>> {
        self.submissions
            .iter()
            .filter(|entry| entry.key().1 == student_id)
            .map(|entry| row_to_submission(&entry))
            .collect()
    }

    /// 列出某学生在一组作业中已评分的提交
    pub async fn list_graded_submissions_impl(
        &self,
        assignment_ids: &[i64],
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        let graded = SubmissionStatus::Graded.to_string();
        self.submissions
            .iter()
            .filter(|entry| {
                entry.key().1 == student_id
                    && assignment_ids.contains(&entry.key().0)
                    && entry.status == graded
            })
            .map(|entry| row_to_submission(&entry))
            .collect()
    }

    /// 以 (assignment_id, student_id) 为键写入提交
    ///
    /// 已有记录被整行覆盖但保留原 ID；不存在则分配新 ID。
    pub async fn upsert_submission_impl(&self, draft: SubmissionDraft) -> Result<Submission> {
        let key = (draft.assignment_id, draft.student_id);

        let row = match self.submissions.entry(key) {
            Entry::Occupied(mut occupied) => {
                let row = draft_to_row(occupied.get().id, &draft)?;
                occupied.insert(row.clone());
                row
            }
            Entry::Vacant(vacant) => {
                let row = draft_to_row(self.next_submission_id(), &draft)?;
                vacant.insert(row.clone());
                self.submission_keys.insert(row.id, key);
                row
            }
        };

        row_to_submission(&row)
    }
}
