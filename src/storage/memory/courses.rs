//! 课程存储操作

use super::MemoryStorage;
use crate::errors::{GradeSystemError, Result};
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};

impl MemoryStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        // 课程代码唯一
        if self.get_course_by_code_impl(&req.course_code).await?.is_some() {
            return Err(GradeSystemError::validation(format!(
                "课程代码已存在: {}",
                req.course_code
            )));
        }

        let course = Course {
            id: self.next_course_id(),
            course_name: req.course_name,
            course_code: req.course_code,
            description: req.description,
        };
        self.courses.insert(course.id, course.clone());
        Ok(course)
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        Ok(self.courses.get(&course_id).map(|c| c.clone()))
    }

    /// 通过课程代码获取课程
    pub async fn get_course_by_code_impl(&self, course_code: &str) -> Result<Option<Course>> {
        Ok(self
            .courses
            .iter()
            .find(|entry| entry.course_code == course_code)
            .map(|entry| entry.clone()))
    }

    /// 列出课程（按名称排序）
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = self.courses.iter().map(|entry| entry.clone()).collect();
        courses.sort_by(|a, b| a.course_name.cmp(&b.course_name));
        Ok(courses)
    }
}
