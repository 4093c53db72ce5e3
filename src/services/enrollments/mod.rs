pub mod cards;
pub mod resolve;

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::enrollments::entities::EnrollmentRecord;
use crate::models::enrollments::responses::ClassCard;
use crate::services::grades::GradeService;
use crate::storage::Storage;

/// 选课记录解析
///
/// 把历史遗留的多态选课条目归一化为课程 ID 集合，
/// 用于限定学生可见的作业与成绩范围。
pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 解析用户可见的系统课程 ID 集合（无记录时为空集）
    pub async fn course_ids(&self, user_id: i64) -> Result<BTreeSet<i64>> {
        resolve::course_ids(self, user_id).await
    }

    /// 覆盖用户的选课记录
    pub async fn set_enrollment(
        &self,
        user_id: i64,
        entries: Vec<serde_json::Value>,
    ) -> Result<EnrollmentRecord> {
        resolve::set_enrollment(self, user_id, entries).await
    }

    /// 构建「我的课程」卡片；传入 GradeService 时附带成绩汇总
    pub async fn class_cards(
        &self,
        user_id: i64,
        grades: Option<&GradeService>,
    ) -> Result<Vec<ClassCard>> {
        cards::class_cards(self, user_id, grades).await
    }
}
