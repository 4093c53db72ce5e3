use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::GradeSystemError;

/// 提交状态
///
/// 「未提交」没有对应记录，不是一个状态值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Submitted,
    Graded,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "Submitted"),
            SubmissionStatus::Graded => write!(f, "Graded"),
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = GradeSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Submitted" => Ok(SubmissionStatus::Submitted),
            "Graded" => Ok(SubmissionStatus::Graded),
            other => Err(GradeSystemError::validation(format!(
                "未知的提交状态: {other}"
            ))),
        }
    }
}

/// 评分映射：评分标准 ID -> 得分
///
/// 序列化形式是文本键的 JSON 对象（部分存储编码只支持文本键），
/// 反序列化时键无损转换回数值 ID；转换只发生在存储边界，
/// 汇总算法内部始终使用数值键。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RubricScores(BTreeMap<i64, i64>);

impl RubricScores {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, criterion_id: i64, score: i64) {
        self.0.insert(criterion_id, score);
    }

    pub fn get(&self, criterion_id: i64) -> Option<i64> {
        self.0.get(&criterion_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// 各项得分之和
    pub fn total(&self) -> i64 {
        self.0.values().sum()
    }
}

impl From<BTreeMap<i64, i64>> for RubricScores {
    fn from(scores: BTreeMap<i64, i64>) -> Self {
        Self(scores)
    }
}

impl Serialize for RubricScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k.to_string(), *v)))
    }
}

impl<'de> Deserialize<'de> for RubricScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, i64>::deserialize(deserializer)?;
        let mut scores = BTreeMap::new();
        for (key, value) in raw {
            let criterion_id: i64 = key
                .parse()
                .map_err(|_| D::Error::custom(format!("无效的评分标准 ID 键: {key}")))?;
            scores.insert(criterion_id, value);
        }
        Ok(RubricScores(scores))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    // 唯一 ID
    pub id: i64,
    // 所属作业 ID
    pub assignment_id: i64,
    // 学生 ID；每个 (assignment_id, student_id) 至多一条记录
    pub student_id: i64,
    // 提交内容
    pub content: Option<String>,
    // 提交状态
    pub status: SubmissionStatus,
    // 总分（各评分标准得分之和）
    pub score: Option<i64>,
    // 按评分标准拆分的得分
    pub rubric_scores: Option<RubricScores>,
    // 提交时间；教师直接评分从未提交的作业时由评分操作补记
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rubric_scores_total() {
        let mut scores = RubricScores::new();
        scores.insert(1, 18);
        scores.insert(2, 25);
        assert_eq!(scores.total(), 43);
        assert_eq!(scores.get(1), Some(18));
        assert_eq!(scores.get(3), None);
    }

    #[test]
    fn test_rubric_scores_text_key_round_trip() {
        let mut scores = RubricScores::new();
        scores.insert(7, 10);
        scores.insert(12, 0);
        scores.insert(9_007_199_254_740_993, 5); // 超出 f64 精度的 ID 也必须无损

        let encoded = serde_json::to_string(&scores).unwrap();
        // 存储编码使用文本键
        assert!(encoded.contains("\"7\""));
        assert!(encoded.contains("\"9007199254740993\""));

        let decoded: RubricScores = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, scores);
    }

    #[test]
    fn test_rubric_scores_rejects_non_numeric_key() {
        let result: Result<RubricScores, _> = serde_json::from_str(r#"{"abc": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            "Graded".parse::<SubmissionStatus>().unwrap(),
            SubmissionStatus::Graded
        );
        assert_eq!(SubmissionStatus::Submitted.to_string(), "Submitted");
        assert!("Pending".parse::<SubmissionStatus>().is_err());
    }
}
