//! アダプター層（アウトバウンドポートの実装）
//!
//! usecase はポートの trait 越しにここへ到達する。実行時は wiring が
//! 標準実装を注入し、テストは stub_* のスタブを注入する。

pub mod app_resolver;
pub mod browser_opener;
pub mod client_factory;
pub mod console_notice;
pub mod html_presenter;
pub mod stdin_prompt;
pub mod stub_output;
pub mod stub_records;

pub use app_resolver::StdAppResolver;
pub use browser_opener::BrowserOpener;
pub use client_factory::KintoneApiFactory;
pub use console_notice::ConsoleNotice;
pub use html_presenter::HtmlPresenter;
pub use stdin_prompt::StdinSearchPrompt;
