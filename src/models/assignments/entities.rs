use serde::{Deserialize, Serialize};

use crate::models::submissions::entities::{Submission, SubmissionStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 关联的课程 ID（None 表示通用作业，对所有课程可见）
    pub course_id: Option<i64>,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 作业分类（homework / exam / project 等，由权重表定义）
    pub category: String,
    // 作业总分
    pub points: i64,
    // 截止时间
    pub due_date: chrono::DateTime<chrono::Utc>,
    // 是否接收提交
    pub allow_submissions: bool,
    // 创建者 ID
    pub created_by: i64,
}

/// 作业进度徽章（学生视角）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressBadge {
    Closed,
    Graded,
    Submitted,
    Overdue,
    Pending,
}

impl ProgressBadge {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressBadge::Closed => "Closed",
            ProgressBadge::Graded => "Graded",
            ProgressBadge::Submitted => "Submitted",
            ProgressBadge::Overdue => "Overdue",
            ProgressBadge::Pending => "Pending",
        }
    }
}

impl Assignment {
    /// 推导学生视角的进度徽章
    ///
    /// 判定顺序：已关闭 > 已评分 > 已提交 > 已逾期 > 待完成。
    pub fn progress_badge(
        &self,
        submission: Option<&Submission>,
        now: chrono::DateTime<chrono::Utc>,
    ) -> ProgressBadge {
        if !self.allow_submissions {
            return ProgressBadge::Closed;
        }
        if let Some(sub) = submission {
            if sub.status == SubmissionStatus::Graded {
                return ProgressBadge::Graded;
            }
            return ProgressBadge::Submitted;
        }
        if self.due_date < now {
            return ProgressBadge::Overdue;
        }
        ProgressBadge::Pending
    }
}
