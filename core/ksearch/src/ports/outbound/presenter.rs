//! 検索結果出力ポート

use crate::domain::{OutputTarget, ResultRow, SearchQuery};
use common::error::Error;
use std::path::PathBuf;

/// 検索結果をドキュメントとして出力する
pub trait ResultPresenter: Send + Sync {
    /// 出力先がファイルの場合はそのパスを返す
    fn present(
        &self,
        query: &SearchQuery,
        rows: &[ResultRow],
        output: &OutputTarget,
    ) -> Result<Option<PathBuf>, Error>;
}
