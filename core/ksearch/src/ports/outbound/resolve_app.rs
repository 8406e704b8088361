//! 接続先アプリの解決ポート

use crate::domain::AppTarget;
use common::error::Error;
use common::kintone::AppId;

/// 解決済みの接続先アプリ
///
/// API トークンは環境変数から取り出した実値を保持する。
#[derive(Debug, Clone)]
pub struct ResolvedApp {
    /// プロファイル名（アドホック指定では None）
    pub name: Option<String>,
    pub base_url: String,
    pub app: AppId,
    pub api_token: String,
    /// 未指定時に使う検索フィールド
    pub default_field: Option<String>,
    /// キーワードの代替に使うフィールド
    pub title_field: Option<String>,
}

/// AppTarget を接続情報まで解決する
pub trait ResolveAppProfile: Send + Sync {
    fn resolve(&self, target: &AppTarget) -> Result<ResolvedApp, Error>;
}
