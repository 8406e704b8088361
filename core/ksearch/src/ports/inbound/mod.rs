//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// 検索アプリケーションを実行する Inbound ポート
///
/// main はこの trait を実装した型（Runner）の run を呼び出し、終了コードを受け取る。
pub trait UseCaseRunner: Send + Sync {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
