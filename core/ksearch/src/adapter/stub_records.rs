//! テスト用: 固定ページ列を返す RecordApi 実装


#[cfg(test)]
pub use stub::{StubApiFactory, StubRecordApi};
