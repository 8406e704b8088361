//! ksearch コマンドの enum（Command Pattern）
//!
//! 検索 vs 一覧表示 vs 対話モードの分岐を enum で明示する。

use std::path::PathBuf;

/// 検索対象アプリの指定方法
#[derive(Debug, Clone, PartialEq)]
pub enum AppTarget {
    /// apps.json のプロファイル名（None なら KSEARCH_APP / default_app）
    Profile(Option<String>),
    /// --base-url / --app-id による直接指定
    AdHoc { base_url: String, app_id: u64 },
}

/// 結果ドキュメントの出力先
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    /// 状態ディレクトリ配下に日時付きファイル名で出力
    StateDir,
    /// 指定パスへ出力
    Path(PathBuf),
    /// 標準出力へ出力（ブラウザは開かない）
    Stdout,
}

/// ksearch の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum KsCommand {
    /// ヘルプ表示
    Help,
    /// apps.json のプロファイル一覧
    ListApps,
    /// 検索可能フィールド一覧
    ListFields { target: AppTarget },
    /// 1 回の検索
    Search {
        target: AppTarget,
        field: Option<String>,
        text: String,
        output: OutputTarget,
        open: bool,
    },
    /// 対話モード（1 回フェッチして繰り返し検索）
    Interactive {
        target: AppTarget,
        output: OutputTarget,
        open: bool,
    },
}
