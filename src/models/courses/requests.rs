use serde::Deserialize;

/// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub course_name: String,
    pub course_code: String,
    pub description: Option<String>,
}
