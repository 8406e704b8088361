//! 結果ドキュメントを既定のブラウザで開くアダプター

use crate::ports::outbound::DocumentOpener;
use common::error::Error;
use std::path::Path;
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const OPEN_COMMAND: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPEN_COMMAND: &str = "xdg-open";

/// OS のオープナーコマンドに委譲する実装
///
/// 起動するだけで終了は待たない。ブラウザの終了コードは関知しない。
pub struct BrowserOpener;

impl BrowserOpener {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentOpener for BrowserOpener {
    fn open(&self, path: &Path) -> Result<(), Error> {
        Command::new(OPEN_COMMAND)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::io_msg(format!("Failed to run {}: {}", OPEN_COMMAND, e)))?;
        Ok(())
    }
}
