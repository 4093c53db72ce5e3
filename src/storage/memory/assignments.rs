//! 作业存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};

impl MemoryStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let assignment = Assignment {
            id: self.next_assignment_id(),
            course_id: req.course_id,
            title: req.title,
            description: req.description,
            category: req.category,
            points: req.points,
            due_date: req.due_date,
            allow_submissions: req.allow_submissions,
            created_by,
        };
        self.assignments.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        Ok(self.assignments.get(&assignment_id).map(|a| a.clone()))
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let Some(mut entry) = self.assignments.get_mut(&assignment_id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            entry.title = title;
        }
        if let Some(description) = update.description {
            entry.description = description;
        }
        if let Some(course_id) = update.course_id {
            entry.course_id = course_id;
        }
        if let Some(category) = update.category {
            entry.category = category;
        }
        if let Some(points) = update.points {
            entry.points = points;
        }
        if let Some(due_date) = update.due_date {
            entry.due_date = due_date;
        }
        if let Some(allow_submissions) = update.allow_submissions {
            entry.allow_submissions = allow_submissions;
        }

        Ok(Some(entry.clone()))
    }

    /// 删除作业，级联删除其评分标准与提交
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        self.criteria
            .retain(|_, criterion| criterion.assignment_id != assignment_id);

        let submission_keys: Vec<(i64, i64)> = self
            .submissions
            .iter()
            .filter(|entry| entry.key().0 == assignment_id)
            .map(|entry| *entry.key())
            .collect();
        for key in submission_keys {
            if let Some((_, row)) = self.submissions.remove(&key) {
                self.submission_keys.remove(&row.id);
            }
        }

        Ok(self.assignments.remove(&assignment_id).is_some())
    }

    /// 列出全部作业（按截止时间排序）
    pub async fn list_assignments_impl(&self) -> Result<Vec<Assignment>> {
        let mut assignments: Vec<Assignment> =
            self.assignments.iter().map(|entry| entry.clone()).collect();
        assignments.sort_by_key(|a| a.due_date);
        Ok(assignments)
    }

    /// 列出某课程的作业（按截止时间排序）
    pub async fn list_assignments_by_course_impl(&self, course_id: i64) -> Result<Vec<Assignment>> {
        let mut assignments: Vec<Assignment> = self
            .assignments
            .iter()
            .filter(|entry| entry.course_id == Some(course_id))
            .map(|entry| entry.clone())
            .collect();
        assignments.sort_by_key(|a| a.due_date);
        Ok(assignments)
    }

    /// 列出某创建者的作业（按截止时间排序）
    pub async fn list_assignments_by_creator_impl(&self, creator_id: i64) -> Result<Vec<Assignment>> {
        let mut assignments: Vec<Assignment> = self
            .assignments
            .iter()
            .filter(|entry| entry.created_by == creator_id)
            .map(|entry| entry.clone())
            .collect();
        assignments.sort_by_key(|a| a.due_date);
        Ok(assignments)
    }
}
