//! ドキュメントを開くポート

use common::error::Error;
use std::path::Path;

/// 出力済みドキュメントを既定のアプリケーションで開く
pub trait DocumentOpener: Send + Sync {
    fn open(&self, path: &Path) -> Result<(), Error>;
}
