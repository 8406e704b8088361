//! kintone レコードモデル
//!
//! レコードはフィールド ID から値への順序付き集合。順序はホストレスポンスの
//! JSON オブジェクト順で、フィールド一覧と表の列はこの順序に従う。

pub mod field_value;
pub mod matching;

pub use field_value::{FieldValue, TableRow};
pub use matching::QueryValue;

use crate::error::Error;
use serde_json::Value;

/// `$id` フィールドの ID
pub const ID_FIELD: &str = "$id";

/// レコード ID（`$id` の値）
///
/// ホストが採番する単調増加の数値文字列。ページネーションのカーソルとして
/// のみ使い、書き換えない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 数値としての値（昇順検証用）
    pub fn seq(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 1 件のレコード（フィールド ID → 値、出現順を保持）
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new(fields: Vec<(String, FieldValue)>) -> Self {
        Self { fields }
    }

    /// レスポンスの 1 レコード分（フィールド ID → `{type, value}`）から変換する。
    /// `value` メンバーを持たないフィールドは Null として扱う（セル単位で許容）。
    pub fn from_json(v: &Value) -> Result<Self, Error> {
        let obj = v
            .as_object()
            .ok_or_else(|| Error::json("Record is not a JSON object".to_string()))?;
        let mut fields = Vec::with_capacity(obj.len());
        for (id, envelope) in obj {
            let value = match envelope.get("value") {
                Some(inner) => FieldValue::from_json(inner),
                None => FieldValue::Null,
            };
            fields.push((id.clone(), value));
        }
        Ok(Self { fields })
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, v)| v)
    }

    /// フィールド ID を出現順で返す
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(id, _)| id.as_str())
    }

    /// `$id` の値
    pub fn id(&self) -> Option<RecordId> {
        self.get(ID_FIELD)
            .and_then(|v| v.scalar_string())
            .map(RecordId::new)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
