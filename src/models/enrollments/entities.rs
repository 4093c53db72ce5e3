use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 选课记录
///
/// `entries` 是历史遗留的多态 JSON 列表，条目形状不统一：
/// 裸课程 ID、数字字符串、带 `course_id` 的对象，或描述外部课程的
/// 自由对象。畸形条目一律跳过，不视为错误。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    // 唯一 ID
    pub id: i64,
    // 所属用户 ID（每个用户至多一条记录）
    pub user_id: i64,
    // 原始条目列表
    pub entries: Vec<Value>,
}

/// 归一化后的选课条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentEntry {
    /// 指向系统内的课程
    CourseRef(i64),
    /// 外部课程，不对应任何系统 Course
    External {
        title: String,
        course_code: String,
        description: String,
        link: Option<String>,
    },
}

impl EnrollmentEntry {
    /// 归一化单个原始条目；无法识别的形状返回 None
    pub fn from_value(value: &Value) -> Option<EnrollmentEntry> {
        match value {
            Value::Number(n) => n.as_i64().map(EnrollmentEntry::CourseRef),
            Value::String(s) => {
                if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
                    s.parse().ok().map(EnrollmentEntry::CourseRef)
                } else {
                    None
                }
            }
            Value::Object(map) => {
                if let Some(course_id) = map.get("course_id").and_then(Value::as_i64) {
                    return Some(EnrollmentEntry::CourseRef(course_id));
                }
                let title = map.get("title").and_then(Value::as_str)?;
                if title.is_empty() {
                    return None;
                }
                Some(EnrollmentEntry::External {
                    title: title.to_string(),
                    course_code: string_field(map, "course_code"),
                    description: string_field(map, "description"),
                    link: map
                        .get("link")
                        .and_then(Value::as_str)
                        .map(|s| s.to_string()),
                })
            }
            _ => None,
        }
    }
}

fn string_field(map: &serde_json::Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl EnrollmentRecord {
    /// 归一化全部条目，畸形条目静默跳过
    pub fn normalized_entries(&self) -> Vec<EnrollmentEntry> {
        self.entries
            .iter()
            .filter_map(EnrollmentEntry::from_value)
            .collect()
    }

    /// 解析为系统课程 ID 集合
    ///
    /// 只有 `CourseRef` 条目参与；结果与条目顺序无关，重复解析结果一致。
    pub fn course_ids(&self) -> BTreeSet<i64> {
        self.normalized_entries()
            .into_iter()
            .filter_map(|entry| match entry {
                EnrollmentEntry::CourseRef(id) => Some(id),
                EnrollmentEntry::External { .. } => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(entries: Vec<Value>) -> EnrollmentRecord {
        EnrollmentRecord {
            id: 1,
            user_id: 2,
            entries,
        }
    }

    #[test]
    fn test_resolve_mixed_entries() {
        // 裸 ID、数字字符串、course_id 对象、外部课程
        let record = record(vec![
            json!(3),
            json!("5"),
            json!({"course_id": 7}),
            json!({"title": "External Club"}),
        ]);
        let ids = record.course_ids();
        assert_eq!(ids, BTreeSet::from([3, 5, 7]));
    }

    #[test]
    fn test_resolve_is_order_independent() {
        let forward = record(vec![json!(1), json!("2"), json!({"course_id": 3})]);
        let reversed = record(vec![json!({"course_id": 3}), json!("2"), json!(1)]);
        assert_eq!(forward.course_ids(), reversed.course_ids());
        // 幂等
        assert_eq!(forward.course_ids(), forward.course_ids());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let record = record(vec![
            json!(null),
            json!(true),
            json!("12a"),
            json!(""),
            json!([1, 2]),
            json!({"name": "no usable keys"}),
            json!({"title": ""}),
            json!(4),
        ]);
        assert_eq!(record.course_ids(), BTreeSet::from([4]));
    }

    #[test]
    fn test_external_entry_normalization() {
        let value = json!({
            "title": "Chess Club",
            "course_code": "CLUB1",
            "link": "https://example.com"
        });
        let entry = EnrollmentEntry::from_value(&value).unwrap();
        assert_eq!(
            entry,
            EnrollmentEntry::External {
                title: "Chess Club".to_string(),
                course_code: "CLUB1".to_string(),
                description: String::new(),
                link: Some("https://example.com".to_string()),
            }
        );
    }
}
