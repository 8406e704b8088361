//! KintoneClient を組み立てるアダプター

use crate::ports::outbound::{RecordApiFactory, ResolvedApp};
use common::kintone::{KintoneClient, RecordApi};
use std::sync::Arc;

/// 解決済みアプリから本物の HTTP クライアントを作る実装
pub struct KintoneApiFactory;

impl KintoneApiFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KintoneApiFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordApiFactory for KintoneApiFactory {
    fn for_app(&self, app: &ResolvedApp) -> Arc<dyn RecordApi> {
        Arc::new(KintoneClient::new(
            app.base_url.clone(),
            app.app,
            app.api_token.clone(),
        ))
    }
}
