//! フィールド値の型（文字列・数値・サブテーブル・空）

use serde_json::Value;

/// フィールド値のタグ付き共用体
///
/// `{type, value}` エンベロープの `value` から変換する。添付ファイルや
/// ユーザー選択など表にできない形は Null に落とす（マッチ対象外・`-` 表示）。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Null,
    Table(Vec<TableRow>),
}

/// サブテーブルの 1 行（行 ID とサブフィールドの順序付き集合）
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    row_id: Option<String>,
    values: Vec<(String, FieldValue)>,
}

impl TableRow {
    pub fn new(row_id: Option<String>, values: Vec<(String, FieldValue)>) -> Self {
        Self { row_id, values }
    }

    pub fn row_id(&self) -> Option<&str> {
        self.row_id.as_deref()
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, v)| v)
    }

    /// サブフィールドを出現順で返す
    pub fn values(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(id, v)| (id.as_str(), v))
    }
}

impl FieldValue {
    /// JSON 値から変換する
    pub fn from_json(v: &Value) -> FieldValue {
        match v {
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null),
            Value::Array(items) => Self::table_from_json(items).unwrap_or(FieldValue::Null),
            _ => FieldValue::Null,
        }
    }

    /// サブテーブル形式（全要素が `value` オブジェクトを持つ）なら Table に変換する
    fn table_from_json(items: &[Value]) -> Option<FieldValue> {
        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let value_obj = item.get("value")?.as_object()?;
            let row_id = item.get("id").and_then(|v| v.as_str()).map(String::from);
            let mut values = Vec::with_capacity(value_obj.len());
            for (id, envelope) in value_obj {
                let value = match envelope.get("value") {
                    Some(inner) => FieldValue::from_json(inner),
                    None => FieldValue::Null,
                };
                values.push((id.clone(), value));
            }
            rows.push(TableRow::new(row_id, values));
        }
        Some(FieldValue::Table(rows))
    }

    /// スカラーの文字列表現（Text はそのまま、Number は最短表記）。
    /// Null と Table は None。
    pub fn scalar_string(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Null | FieldValue::Table(_) => None,
        }
    }
}
