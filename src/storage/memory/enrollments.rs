//! 选课记录存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::enrollments::entities::EnrollmentRecord;
use dashmap::mapref::entry::Entry;

impl MemoryStorage {
    /// 获取用户的选课记录
    pub async fn get_enrollment_by_user_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<EnrollmentRecord>> {
        Ok(self.enrollments.get(&user_id).map(|r| r.clone()))
    }

    /// 覆盖用户的选课记录（每个用户至多一条）
    pub async fn set_enrollment_impl(
        &self,
        user_id: i64,
        entries: Vec<serde_json::Value>,
    ) -> Result<EnrollmentRecord> {
        let record = match self.enrollments.entry(user_id) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().entries = entries;
                occupied.get().clone()
            }
            Entry::Vacant(vacant) => {
                let record = EnrollmentRecord {
                    id: self.next_enrollment_id(),
                    user_id,
                    entries,
                };
                vacant.insert(record.clone());
                record
            }
        };
        Ok(record)
    }
}
