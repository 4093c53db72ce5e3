use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 唯一 ID
    pub id: i64,
    // 课程名称
    pub course_name: String,
    // 课程代码（唯一）
    pub course_code: String,
    // 课程描述
    pub description: Option<String>,
}
