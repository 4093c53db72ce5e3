pub mod summary;

use std::sync::Arc;

use crate::config::GradingConfig;
use crate::errors::Result;
use crate::models::grades::responses::GradeSummary;
use crate::storage::Storage;

/// 加权成绩汇总
///
/// 纯读侧计算，不产生任何写入，每次请求重算即可。
pub struct GradeService {
    storage: Arc<dyn Storage>,
    grading: GradingConfig,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>, grading: GradingConfig) -> Self {
        Self { storage, grading }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn grading(&self) -> &GradingConfig {
        &self.grading
    }

    /// 计算学生在某课程的加权成绩
    pub async fn weighted_grade(&self, student_id: i64, course_id: i64) -> Result<GradeSummary> {
        summary::weighted_grade(self, student_id, course_id).await
    }
}
