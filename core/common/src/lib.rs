//! ksearch 共通ライブラリ
//!
//! レコードモデル・マッチ判定・kintone クライアントなど、
//! CLI から共有される機能を提供します。

/// エラーハンドリング
pub mod error;

/// 共通ドメイン型
pub mod domain;

/// レコードモデルとマッチ判定
pub mod record;

/// kintone REST API クライアントと設定
pub mod kintone;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプター実装
pub mod adapter;
