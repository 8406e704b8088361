//! レコード取得 Outbound ポート
//!
//! usecase はこの trait 経由でのみ records API を呼ぶ。

use crate::error::Error;
use crate::record::Record;

/// クエリ 1 回分のレコード取得（Outbound ポート）
///
/// 実装は `common::kintone::KintoneClient` やテスト用のスタブなど。
pub trait RecordApi: Send + Sync {
    /// records API にクエリを発行し、該当レコードを返す
    fn query_records(&self, query: &str) -> Result<Vec<Record>, Error>;
}
