use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::rubrics::requests::CreateCriterionRequest;
use crate::models::submissions::requests::{CreateSubmissionRequest, GradeSubmissionRequest};
use crate::services::{AssignmentService, EnrollmentService, GradeService, SubmissionService};
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备引擎启动的上下文
///
/// 权重表在 AppConfig::load 时已校验，不合法的配置根本到不了这里。
pub async fn prepare_engine_startup() -> StartupContext {
    let config = AppConfig::get();
    warn!(
        "Grading weights in effect: {:?} (fallback: {})",
        config.grading.weights, config.grading.fallback_category
    );

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized");

    StartupContext { storage }
}

/// 写入演示数据并完整跑一遍提交、评分、汇总流程
pub async fn seed_demo(storage: &Arc<dyn Storage>) -> Result<()> {
    // 用户体系由宿主应用提供，这里只需要稳定的标识
    const INSTRUCTOR_ID: i64 = 10;
    const STUDENT_ID: i64 = 2;

    let grading = AppConfig::get().grading.clone();
    let assignments = AssignmentService::new(storage.clone(), grading.clone());
    let submissions = SubmissionService::new(storage.clone());
    let grades = GradeService::new(storage.clone(), grading);
    let enrollments = EnrollmentService::new(storage.clone());

    info!("Seeding demo data...");

    let physics = storage
        .create_course(CreateCourseRequest {
            course_name: "Physics".to_string(),
            course_code: "PHYS101".to_string(),
            description: Some("Introductory mechanics".to_string()),
        })
        .await?;
    let math = storage
        .create_course(CreateCourseRequest {
            course_name: "Calculus I".to_string(),
            course_code: "MATH201".to_string(),
            description: Some("Limits, derivatives, integrals".to_string()),
        })
        .await?;

    // 选课记录故意混合几种历史条目形状
    enrollments
        .set_enrollment(
            STUDENT_ID,
            vec![
                json!(physics.id),
                json!(math.id.to_string()),
                json!({"title": "Chess Club", "course_code": "CLUB1", "link": "https://example.com/chess"}),
            ],
        )
        .await?;

    // 默认评分标准的路径
    let homework = assignments
        .create(
            INSTRUCTOR_ID,
            CreateAssignmentRequest {
                title: "Problem Set 1".to_string(),
                description: "Kinematics and forces".to_string(),
                course_id: Some(physics.id),
                category: "homework".to_string(),
                points: 50,
                due_date: Utc::now() + Duration::days(7),
                allow_submissions: true,
            },
        )
        .await?;

    // 手工评分标准的路径
    let exam = storage
        .create_assignment(
            INSTRUCTOR_ID,
            CreateAssignmentRequest {
                title: "Midterm Exam".to_string(),
                description: "Chapters 1-5".to_string(),
                course_id: Some(physics.id),
                category: "exam".to_string(),
                points: 50,
                due_date: Utc::now() + Duration::days(14),
                allow_submissions: true,
            },
        )
        .await?;
    let multiple_choice = storage
        .create_criterion(CreateCriterionRequest {
            assignment_id: exam.id,
            title: "Multiple Choice".to_string(),
            description: None,
            max_points: 30,
        })
        .await?;
    let free_response = storage
        .create_criterion(CreateCriterionRequest {
            assignment_id: exam.id,
            title: "Free Response".to_string(),
            description: None,
            max_points: 20,
        })
        .await?;

    // 学生提交，教师按评分标准评分
    let homework_submission = submissions
        .submit(
            STUDENT_ID,
            homework.id,
            CreateSubmissionRequest {
                content: "My solutions to the problem set".to_string(),
            },
        )
        .await?;
    let homework_criteria = storage.list_criteria_by_assignment(homework.id).await?;
    submissions
        .grade(
            homework_submission.id,
            GradeSubmissionRequest {
                scores: HashMap::from([(homework_criteria[0].id, 45)]),
            },
        )
        .await?;

    let exam_submission = submissions
        .submit(
            STUDENT_ID,
            exam.id,
            CreateSubmissionRequest {
                content: "Exam answers".to_string(),
            },
        )
        .await?;
    submissions
        .grade(
            exam_submission.id,
            GradeSubmissionRequest {
                scores: HashMap::from([(multiple_choice.id, 25), (free_response.id, 15)]),
            },
        )
        .await?;

    // 选课记录解析出的可见课程范围
    let visible_courses = enrollments.course_ids(STUDENT_ID).await?;
    info!(
        "学生 {} 可见课程: {:?}（共 {} 门系统课程）",
        STUDENT_ID,
        visible_courses,
        storage.list_courses().await?.len()
    );

    // 学生工作台：作业列表与进度徽章
    for item in assignments.list_with_badges(STUDENT_ID).await? {
        info!("作业 {}: {}", item.assignment.title, item.badge.label());
    }

    // 教师工作台：待评分队列（此时应为空）
    let pending = assignments.pending_submissions(INSTRUCTOR_ID).await?;
    info!("教师 {} 待评分提交: {}", INSTRUCTOR_ID, pending.len());

    // 成绩汇总
    let summary = grades.weighted_grade(STUDENT_ID, physics.id).await?;
    info!(
        "学生 {} 在 {} 的总评: {:?}",
        STUDENT_ID, physics.course_code, summary.grade
    );
    for (category, grade) in &summary.category_grades {
        info!(
            "  {}: {}/{} ({}%)",
            category, grade.earned, grade.possible, grade.percentage
        );
    }

    // 「我的课程」卡片
    let cards = enrollments.class_cards(STUDENT_ID, Some(&grades)).await?;
    for card in &cards {
        match card.grade_info.as_ref().filter(|g| g.has_grades) {
            Some(grade_info) => info!("课程 {}: 总评 {:?}", card.title, grade_info.grade),
            None => info!("课程 {}: 暂无成绩", card.title),
        }
    }

    Ok(())
}
