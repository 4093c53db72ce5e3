use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::GradeService;
use crate::errors::Result;
use crate::models::grades::responses::{CategoryGrade, GradeSummary};
use crate::models::submissions::entities::Submission;

/// 计算学生在某课程的加权成绩
///
/// 算法：
/// 1. 取课程全部作业；没有作业或没有已评分提交则返回「暂无成绩」。
/// 2. 按配置的分类累计 earned / possible，作业分类不在权重表内时
///    归并到回退分类；只统计总分非空的已评分提交。
/// 3. possible > 0 的分类得到一个百分比（保留一位小数），并以
///    `百分比 × 权重` 计入加权和；权重只对有成绩的分类累计，
///    即总评按实际出现的分类重新归一。只有 homework 有成绩时，
///    总评就等于 homework 的百分比，而不是乘以 0.30。
/// 4. 零分作业 (possible == 0) 不会让分类参与计算，也不会除零。
pub async fn weighted_grade(
    service: &GradeService,
    student_id: i64,
    course_id: i64,
) -> Result<GradeSummary> {
    let storage = service.storage();
    let grading = service.grading();

    let assignments = storage.list_assignments_by_course(course_id).await?;
    if assignments.is_empty() {
        return Ok(GradeSummary::empty());
    }

    let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
    let submissions = storage
        .list_graded_submissions(&assignment_ids, student_id)
        .await?;
    if submissions.is_empty() {
        return Ok(GradeSummary::empty());
    }

    let submission_map: HashMap<i64, &Submission> =
        submissions.iter().map(|s| (s.assignment_id, s)).collect();

    // 按分类累计 (earned, possible)
    let mut category_data: BTreeMap<&str, (i64, i64)> = grading
        .weights
        .keys()
        .map(|category| (category.as_str(), (0, 0)))
        .collect();

    for assignment in &assignments {
        let category = grading.normalize_category(&assignment.category);
        let Some(submission) = submission_map.get(&assignment.id) else {
            continue;
        };
        let Some(score) = submission.score else {
            continue;
        };
        if let Some((earned, possible)) = category_data.get_mut(category) {
            *earned += score;
            *possible += assignment.points;
        }
    }

    // 加权平均，权重按实际有成绩的分类重新归一
    let mut total_weighted = 0.0;
    let mut total_weight_used = 0u32;
    let mut category_grades = BTreeMap::new();

    for (category, (earned, possible)) in category_data {
        if possible <= 0 {
            continue;
        }
        let percentage = earned as f64 / possible as f64 * 100.0;
        category_grades.insert(
            category.to_string(),
            CategoryGrade {
                earned,
                possible,
                percentage: round_one_decimal(percentage),
            },
        );
        let weight = grading.weights[category];
        total_weighted += percentage * weight as f64;
        total_weight_used += weight;
    }

    if total_weight_used == 0 {
        return Ok(GradeSummary::empty());
    }

    let grade = round_one_decimal(total_weighted / total_weight_used as f64);
    debug!(
        "学生 {} 课程 {} 总评 {}（使用权重 {}）",
        student_id, course_id, grade, total_weight_used
    );

    Ok(GradeSummary {
        grade: Some(grade),
        category_grades,
        has_grades: true,
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
