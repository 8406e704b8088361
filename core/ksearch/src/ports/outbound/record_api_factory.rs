//! レコード API 生成ポート

use crate::ports::outbound::ResolvedApp;
use common::kintone::RecordApi;
use std::sync::Arc;

/// 解決済みアプリに対するレコード API クライアントを組み立てる
pub trait RecordApiFactory: Send + Sync {
    fn for_app(&self, app: &ResolvedApp) -> Arc<dyn RecordApi>;
}
