//! フィールド値のマッチ判定
//!
//! 文字列は小文字化した部分一致、数値は同型の厳密一致。サブテーブルは
//! 全行・全サブフィールドのいずれかが一致すれば一致（存在判定のみで、
//! 順位付けはしない）。

use super::field_value::FieldValue;
use super::Record;

/// 検索クエリの値（型でマッチ規則が決まる）
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Number(f64),
}

impl QueryValue {
    pub fn text(s: impl Into<String>) -> Self {
        QueryValue::Text(s.into())
    }

    pub fn number(n: f64) -> Self {
        QueryValue::Number(n)
    }
}

/// レコードの指定フィールドがクエリに一致するか。
/// フィールドが存在しなければ不一致。
pub fn record_matches(record: &Record, field_id: &str, query: &QueryValue) -> bool {
    record
        .get(field_id)
        .map(|v| value_matches(v, query))
        .unwrap_or(false)
}

/// 値がクエリに一致するか
///
/// 文字列クエリが数値フィールドに一致することはない（型をまたぐ暗黙変換は
/// しない）。空の文字列クエリはすべての文字列値に一致する（除外は検証側の
/// 責務）。
pub fn value_matches(value: &FieldValue, query: &QueryValue) -> bool {
    match (value, query) {
        (FieldValue::Text(s), QueryValue::Text(q)) => {
            s.to_lowercase().contains(&q.to_lowercase())
        }
        (FieldValue::Number(n), QueryValue::Number(q)) => n == q,
        (FieldValue::Table(rows), _) => rows
            .iter()
            .any(|row| row.values().any(|(_, v)| value_matches(v, query))),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::field_value::TableRow;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_text_match_is_case_insensitive_substring() {
        let value = text("Tokyo Office");
        assert!(value_matches(&value, &QueryValue::text("tokyo")));
        // 空白を含んでいても連続した部分文字列なら一致する
        assert!(value_matches(&value, &QueryValue::text("kyo Of")));
        assert!(value_matches(&value, &QueryValue::text("KYO OF")));
        // 文字が順に現れるだけの飛び石一致はしない
        assert!(!value_matches(&value, &QueryValue::text("tko")));
        assert!(!value_matches(&value, &QueryValue::text("osaka")));
    }

    #[test]
    fn test_empty_text_query_matches_any_text() {
        assert!(value_matches(&text("anything"), &QueryValue::text("")));
        assert!(value_matches(&text(""), &QueryValue::text("")));
    }

    #[test]
    fn test_number_matches_only_same_typed_query() {
        let value = FieldValue::Number(100.0);
        assert!(value_matches(&value, &QueryValue::number(100.0)));
        assert!(!value_matches(&value, &QueryValue::number(100.5)));
        // 文字列 "100" は数値 100 に一致しない
        assert!(!value_matches(&value, &QueryValue::text("100")));
    }

    #[test]
    fn test_text_does_not_match_number_query() {
        assert!(!value_matches(&text("100"), &QueryValue::number(100.0)));
    }

    #[test]
    fn test_null_never_matches() {
        assert!(!value_matches(&FieldValue::Null, &QueryValue::text("")));
        assert!(!value_matches(&FieldValue::Null, &QueryValue::number(0.0)));
    }

    #[test]
    fn test_table_matches_any_row_any_subfield() {
        let table = FieldValue::Table(vec![
            TableRow::new(
                Some("1".to_string()),
                vec![
                    ("社名".to_string(), text("A社")),
                    ("メール".to_string(), text("a@example.com")),
                ],
            ),
            TableRow::new(
                Some("2".to_string()),
                vec![
                    ("社名".to_string(), text("B社")),
                    ("メール".to_string(), text("sato@example.com")),
                ],
            ),
        ]);
        // 2 行目のサブフィールドにだけ一致する
        assert!(value_matches(&table, &QueryValue::text("sato")));
        assert!(value_matches(&table, &QueryValue::text("B社")));
        assert!(!value_matches(&table, &QueryValue::text("未知の値")));
    }

    #[test]
    fn test_nested_table_recurses() {
        let inner = FieldValue::Table(vec![TableRow::new(
            None,
            vec![("深い列".to_string(), text("deep value"))],
        )]);
        let outer = FieldValue::Table(vec![TableRow::new(None, vec![("内側".to_string(), inner)])]);
        assert!(value_matches(&outer, &QueryValue::text("deep")));
    }

    #[test]
    fn test_record_matches_dispatches_on_field() {
        let record = Record::new(vec![
            ("名称".to_string(), text("Tokyo Office")),
            ("金額".to_string(), FieldValue::Number(100.0)),
        ]);
        assert!(record_matches(&record, "名称", &QueryValue::text("tokyo")));
        assert!(!record_matches(&record, "金額", &QueryValue::text("100")));
        assert!(record_matches(&record, "金額", &QueryValue::number(100.0)));
        // 存在しないフィールドは不一致
        assert!(!record_matches(&record, "不在", &QueryValue::text("tokyo")));
    }
}
