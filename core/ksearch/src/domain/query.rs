//! 検索クエリのドメイン型（検証規則を持つ）

use crate::domain::fields;
use common::error::Error;

/// 通常フィールドの最小クエリ長（文字数）
pub const MIN_QUERY_LEN: usize = 2;

/// 日付系フィールドの最小クエリ長（文字数）
pub const MIN_DATE_QUERY_LEN: usize = 6;

/// フィールド ID と検索文字列の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    field_id: String,
    text: String,
}

impl SearchQuery {
    pub fn new(field_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            text: text.into(),
        }
    }

    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// クエリを検証する（フィルタやフェッチより前に呼ぶ）
    ///
    /// - 最小長: 日付系フィールドは 6 文字、その他は 2 文字
    /// - 空白禁止: 半角スペース（U+0020）と全角スペース（U+3000）
    pub fn validate(&self) -> Result<(), Error> {
        let min = if fields::is_date_like(&self.field_id) {
            MIN_DATE_QUERY_LEN
        } else {
            MIN_QUERY_LEN
        };
        if self.text.chars().count() < min {
            return Err(Error::validation(format!(
                "Query must be at least {} characters for field '{}'",
                min, self.field_id
            )));
        }
        if self.text.contains(' ') || self.text.contains('\u{3000}') {
            return Err(Error::validation(
                "Query must not contain spaces (single-word queries only)",
            ));
        }
        Ok(())
    }
}
