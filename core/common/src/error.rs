//! エラーハンドリング
//!
//! ksearch 全体で使うエラー型。失敗の種類ごとに variant を分け、
//! sysexits(3) に準拠した終了コードへ対応付ける。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, ThisError)]
pub enum Error {
    /// 使い方の誤り（不明なオプション・引数不足など）: EX_USAGE
    #[error("{0}")]
    Usage(String),

    /// 検索クエリの検証エラー（短すぎる・空白を含む）: EX_DATAERR
    #[error("{0}")]
    Validation(String),

    /// HTTP / API の失敗: EX_UNAVAILABLE
    #[error("{0}")]
    Http(String),

    /// JSON の解析・整形の失敗: EX_SOFTWARE
    #[error("{0}")]
    Json(String),

    /// ファイル I/O の失敗: EX_IOERR
    #[error("{0}")]
    Io(String),

    /// 環境変数の不足・不正: EX_CONFIG
    #[error("{0}")]
    Env(String),

    /// 設定ファイルの不足・不正: EX_CONFIG
    #[error("{0}")]
    Config(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::Usage(msg.into())
    }

    /// クエリ検証エラー
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// HTTP / API エラー
    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    /// JSON エラー
    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// 環境変数エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// 設定エラー
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// sysexits(3) 準拠の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 64,
            Error::Validation(_) => 65,
            Error::Http(_) => 69,
            Error::Json(_) => 70,
            Error::Io(_) => 74,
            Error::Env(_) | Error::Config(_) => 78,
        }
    }

    /// 使い方の誤りか（usage 表示の要否）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }

    /// クエリ検証エラーか（対話モードでは続行できる）
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
