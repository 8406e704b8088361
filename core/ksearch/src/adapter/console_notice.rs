//! stderr へのユーザー通知アダプター

use crate::ports::outbound::UserNotice;
use common::error::Error;

/// stderr に 1 行ずつ書く実装（stdout は結果出力用に空けておく）
pub struct ConsoleNotice;

impl ConsoleNotice {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotice {
    fn default() -> Self {
        Self::new()
    }
}

impl UserNotice for ConsoleNotice {
    fn notify(&self, message: &str) -> Result<(), Error> {
        eprintln!("{}", message);
        Ok(())
    }
}
