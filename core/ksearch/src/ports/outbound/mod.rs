//! Outbound ポート: アプリが外界（kintone API・出力先・ブラウザ等）を使うための trait

pub mod app_lister;
pub mod notice;
pub mod opener;
pub mod presenter;
pub mod prompt;
pub mod record_api_factory;
pub mod resolve_app;

pub use app_lister::AppLister;
pub use notice::UserNotice;
pub use opener::DocumentOpener;
pub use presenter::ResultPresenter;
pub use prompt::{PromptInput, SearchPrompt};
pub use record_api_factory::RecordApiFactory;
pub use resolve_app::{ResolveAppProfile, ResolvedApp};
