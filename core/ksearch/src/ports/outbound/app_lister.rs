//! アプリ一覧ポート

use common::error::Error;

/// 設定済みアプリプロファイルの一覧を返す
pub trait AppLister: Send + Sync {
    /// (名前の昇順リスト, デフォルトアプリ名) を返す
    fn list_apps(&self) -> Result<(Vec<String>, Option<String>), Error>;
}
