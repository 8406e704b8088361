//! 検索結果 1 件分の行データ

use common::record::FieldValue;

/// 結果 URL 列の見出し
pub const RESULT_URL_FIELD: &str = "結果URL";

/// 検索にヒットしたレコードの表示用データ
///
/// fields は表示対象フィールドのみを元レコードの順で保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    fields: Vec<(String, FieldValue)>,
    url: String,
}

impl ResultRow {
    pub fn new(fields: Vec<(String, FieldValue)>, url: impl Into<String>) -> Self {
        Self {
            fields,
            url: url.into(),
        }
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, v)| v)
    }

    /// フィールド ID を保持順で返す
    pub fn field_ids(&self) -> Vec<&str> {
        self.fields.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
