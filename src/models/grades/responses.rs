use std::collections::BTreeMap;

use serde::Serialize;

/// 单个分类的成绩
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGrade {
    // 已获得分数
    pub earned: i64,
    // 满分
    pub possible: i64,
    // 百分比，保留一位小数
    pub percentage: f64,
}

/// 加权成绩汇总
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeSummary {
    // 总评（百分比，保留一位小数）；没有任何成绩时为 None
    pub grade: Option<f64>,
    // 各分类成绩，只包含有成绩的分类
    pub category_grades: BTreeMap<String, CategoryGrade>,
    pub has_grades: bool,
}

impl GradeSummary {
    /// 「暂无成绩」哨兵值
    pub fn empty() -> Self {
        Self {
            grade: None,
            category_grades: BTreeMap::new(),
            has_grades: false,
        }
    }
}
