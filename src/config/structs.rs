use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{GradeSystemError, Result};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub grading: GradingConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 成绩汇总配置
///
/// 权重表的键集合即作业分类的枚举集合；不在表内的分类
/// 在汇总时统一归一化到 `fallback_category`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    pub weights: HashMap<String, u32>, // 分类 -> 权重，合计必须为 100
    pub fallback_category: String,     // 未知分类的归并目标
}

impl GradingConfig {
    /// 校验权重表（启动时调用一次）
    ///
    /// 约束：权重表非空、权重合计为 100、回退分类必须是权重表的键之一。
    pub fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(GradeSystemError::configuration("权重表不能为空"));
        }

        let total: u32 = self.weights.values().sum();
        if total != 100 {
            return Err(GradeSystemError::configuration(format!(
                "分类权重合计必须为 100，当前为 {total}"
            )));
        }

        if !self.weights.contains_key(&self.fallback_category) {
            return Err(GradeSystemError::configuration(format!(
                "回退分类 {} 不在权重表中",
                self.fallback_category
            )));
        }

        Ok(())
    }

    /// 归一化作业分类：未配置的分类归并到回退分类
    pub fn normalize_category<'a>(&'a self, category: &'a str) -> &'a str {
        if self.weights.contains_key(category) {
            category
        } else {
            &self.fallback_category
        }
    }

    /// 分类是否在配置的枚举集合内
    pub fn is_known_category(&self, category: &str) -> bool {
        self.weights.contains_key(category)
    }
}
