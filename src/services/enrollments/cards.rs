use super::EnrollmentService;
use crate::errors::Result;
use crate::models::enrollments::entities::EnrollmentEntry;
use crate::models::enrollments::responses::ClassCard;
use crate::services::grades::GradeService;

/// 构建「我的课程」卡片
///
/// 系统课程卡片来自 Course 记录，外部课程卡片直接取条目字段；
/// 引用已删除课程的条目跳过。传入 GradeService 时为系统课程
/// 附带成绩汇总。
pub async fn class_cards(
    service: &EnrollmentService,
    user_id: i64,
    grades: Option<&GradeService>,
) -> Result<Vec<ClassCard>> {
    let storage = service.storage();
    let Some(record) = storage.get_enrollment_by_user(user_id).await? else {
        return Ok(Vec::new());
    };

    let mut cards = Vec::new();
    for entry in record.normalized_entries() {
        match entry {
            EnrollmentEntry::External {
                title,
                course_code,
                description,
                link,
            } => cards.push(ClassCard {
                title,
                course_code,
                description,
                link,
                course_id: None,
                grade_info: None,
            }),
            EnrollmentEntry::CourseRef(course_id) => {
                let Some(course) = storage.get_course_by_id(course_id).await? else {
                    continue;
                };
                let grade_info = match grades {
                    Some(grade_service) => {
                        Some(grade_service.weighted_grade(user_id, course_id).await?)
                    }
                    None => None,
                };
                cards.push(ClassCard {
                    title: course.course_name,
                    course_code: course.course_code,
                    description: course.description.unwrap_or_default(),
                    link: None,
                    course_id: Some(course.id),
                    grade_info,
                });
            }
        }
    }

    Ok(cards)
}
