//! フィールド選択規則（検索可能フィールドと日付系の判定）
//!
//! フィールド一覧は先頭レコードの出現順から求める。`$` を含むメタデータ列、
//! `者` を含む作成者/更新者列、`日時` を含む日時列は検索対象にしない。

use common::record::Record;

/// 検索対象に選べるフィールドか
pub fn is_selectable(field_id: &str) -> bool {
    !field_id.contains('$') && !field_id.contains('者') && !field_id.contains("日時")
}

/// 日付系フィールドか（ID に `日付` を含む）
pub fn is_date_like(field_id: &str) -> bool {
    field_id.contains("日付")
}

/// 先頭レコードから検索可能フィールド ID を出現順で返す。
/// レコードが無ければ空。
pub fn selectable_fields(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|r| {
            r.field_ids()
                .filter(|id| is_selectable(id))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::record::FieldValue;

    #[test]
    fn test_is_selectable() {
        assert!(is_selectable("プロジェクト名称"));
        assert!(is_selectable("登録日付"));
        assert!(!is_selectable("$id"));
        assert!(!is_selectable("$revision"));
        assert!(!is_selectable("作成者"));
        assert!(!is_selectable("更新者"));
        assert!(!is_selectable("作成日時"));
        assert!(!is_selectable("更新日時"));
    }

    #[test]
    fn test_is_date_like() {
        assert!(is_date_like("登録日付"));
        assert!(!is_date_like("作成日時"));
        assert!(!is_date_like("名称"));
    }

    #[test]
    fn test_selectable_fields_keeps_order() {
        let record = Record::new(vec![
            ("$id".to_string(), FieldValue::Text("1".to_string())),
            ("プロジェクト名称".to_string(), FieldValue::Text("x".to_string())),
            ("作成者".to_string(), FieldValue::Null),
            ("登録日付".to_string(), FieldValue::Text("2024-01-01".to_string())),
            ("更新日時".to_string(), FieldValue::Null),
            ("金額".to_string(), FieldValue::Number(1.0)),
        ]);
        let fields = selectable_fields(&[record]);
        assert_eq!(fields, vec!["プロジェクト名称", "登録日付", "金額"]);
    }

    #[test]
    fn test_selectable_fields_empty_records() {
        assert!(selectable_fields(&[]).is_empty());
    }
}
