//! インポート文書の解析

use crate::error::{Result, VfmError};
use serde_json::Value;

/// JSONテキストをアイテム列に変換
///
/// トップレベルが配列ならその要素、それ以外は単一アイテムとして扱う。
pub fn parse_document(text: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| VfmError::InvalidInput(format!("Failed to parse JSON: {}", e)))?;

    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// 1件分のインポートアイテム
///
/// 型の合わないフィールドは未指定として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportItem {
    pub folder_code: Option<String>,
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub pronunciation: Option<String>,
    pub level: Option<u32>,
    pub last_review_time: Option<i64>,
    pub next_review_time: Option<i64>,
}

impl ImportItem {
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let text = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let positive = |key: &str| {
            map.get(key)
                .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
                .filter(|v| *v > 0)
        };

        Self {
            folder_code: text("s"),
            word: text("w"),
            meaning: text("m"),
            pronunciation: text("p"),
            level: positive("l").and_then(|v| u32::try_from(v).ok()),
            last_review_time: positive("lt"),
            next_review_time: positive("nt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_document_yields_elements() {
        let items = parse_document(r#"[{"w":"a","m":"b"},{"w":"c","m":"d"}]"#).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn object_document_yields_single_item() {
        let items = parse_document(r#"{"w":"a","m":"b"}"#).unwrap();
        assert_eq!(items, vec![json!({"w":"a","m":"b"})]);
    }

    #[test]
    fn malformed_document_is_invalid_input() {
        let err = parse_document("{oops").unwrap_err();
        assert!(matches!(err, VfmError::InvalidInput(msg) if msg.starts_with("Failed to parse JSON")));
    }

    #[test]
    fn item_reads_all_fields() {
        let item = ImportItem::from_value(&json!({
            "s": "N5", "w": "cat", "m": "mèo", "p": "kæt", "l": 3, "lt": 10, "nt": 20
        }));

        assert_eq!(item.folder_code.as_deref(), Some("N5"));
        assert_eq!(item.pronunciation.as_deref(), Some("kæt"));
        assert_eq!(item.level, Some(3));
        assert_eq!(item.last_review_time, Some(10));
        assert_eq!(item.next_review_time, Some(20));
    }

    #[test]
    fn empty_and_mistyped_fields_are_absent() {
        let item = ImportItem::from_value(&json!({
            "s": "", "w": 5, "m": "", "l": -1, "lt": 0, "nt": "soon"
        }));

        assert_eq!(item, ImportItem::default());
    }

    #[test]
    fn fractional_level_is_truncated() {
        let item = ImportItem::from_value(&json!({"w": "cat", "m": "mèo", "l": 2.5}));
        assert_eq!(item.level, Some(2));
    }

    #[test]
    fn non_object_item_is_empty() {
        assert_eq!(ImportItem::from_value(&json!("cat")), ImportItem::default());
        assert_eq!(ImportItem::from_value(&json!(null)), ImportItem::default());
    }
}
