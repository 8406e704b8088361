//! kintone REST API クライアントと設定

pub mod api;
pub mod client;
pub mod config;
pub mod query;

pub use api::RecordApi;
pub use client::KintoneClient;
pub use config::{AppProfile, AppsConfig};
pub use query::{seek_query, PAGE_SIZE};

use std::fmt;

/// kintone アプリ ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(u64);

impl AppId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
