//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・状態ディレクトリ・API トークンを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{HomeDir, StateDir};
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// アプリプロファイル名を環境変数 KSEARCH_APP から取得
    fn app_name_from_env(&self) -> Option<String>;

    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. KSEARCH_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/ksearch（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/ksearch
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// apps.json のパス
    /// KSEARCH_HOME があれば $KSEARCH_HOME/config/apps.json、なければ
    /// resolve_home_dir() 直下の apps.json（例: ~/.config/ksearch/apps.json）
    fn resolve_apps_config_path(&self) -> Result<PathBuf, Error>;

    /// 状態ディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. KSEARCH_STATE_DIR（設定されていれば）
    /// 2. $XDG_STATE_HOME/ksearch（XDG_STATE_HOME が設定されていれば）
    /// 3. $HOME/.local/state/ksearch
    fn resolve_state_dir(&self) -> Result<StateDir, Error>;

    /// 指定された環境変数から API トークンを取得（未設定・空なら Env エラー）
    fn api_token(&self, env_name: &str) -> Result<String, Error>;
}
