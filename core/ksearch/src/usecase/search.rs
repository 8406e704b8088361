//! レコード検索と結果行の構築

use crate::domain::link::search_link;
use crate::domain::{ResultRow, SearchQuery};
use common::error::Error;
use common::kintone::AppId;
use common::record::matching::{record_matches, QueryValue};
use common::record::{FieldValue, Record};

/// 結果行の構築に必要な検索コンテキスト
pub struct SearchContext<'a> {
    /// ディープリンクの起点（スキーム + ホスト）
    pub origin: &'a str,
    pub app: AppId,
    /// 検索フィールドが表示不能なときキーワードの代わりに使うフィールド
    pub title_field: Option<&'a str>,
    /// 結果行に残すフィールド ID（表示順）
    pub projected_fields: &'a [String],
}

/// 取得済みレコード列を検索し、表示用の結果行を組み立てる
///
/// 検証は通信前に呼び出し側でも行うが、ここでも実行して
/// 未検証のクエリが素通りしないようにする。
pub fn search(
    query: &SearchQuery,
    records: &[Record],
    ctx: &SearchContext<'_>,
) -> Result<Vec<ResultRow>, Error> {
    query.validate()?;
    let value = QueryValue::text(query.text());
    let rows = records
        .iter()
        .filter(|record| record_matches(record, query.field_id(), &value))
        .map(|record| build_row(record, query, ctx))
        .collect();
    Ok(rows)
}

fn build_row(record: &Record, query: &SearchQuery, ctx: &SearchContext<'_>) -> ResultRow {
    let keyword = record
        .get(query.field_id())
        .and_then(FieldValue::scalar_string)
        .or_else(|| {
            ctx.title_field
                .and_then(|f| record.get(f))
                .and_then(FieldValue::scalar_string)
        })
        .unwrap_or_default();
    let url = search_link(ctx.origin, ctx.app, &keyword);
    let fields = ctx
        .projected_fields
        .iter()
        .map(|id| {
            let value = record.get(id).cloned().unwrap_or(FieldValue::Null);
            (id.clone(), value)
        })
        .collect();
    ResultRow::new(fields, url)
}
