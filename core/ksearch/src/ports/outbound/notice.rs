//! ユーザー通知ポート

use common::error::Error;

/// 処理を止めない注意・案内をユーザーへ伝える
pub trait UserNotice: Send + Sync {
    fn notify(&self, message: &str) -> Result<(), Error>;
}
