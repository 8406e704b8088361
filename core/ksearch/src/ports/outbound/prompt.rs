//! 対話モード入力ポート

use common::error::Error;

/// プロンプト 1 回分の入力
#[derive(Debug, Clone, PartialEq)]
pub struct PromptInput {
    /// `フィールド:キーワード` 形式で指定されたフィールド
    pub field_id: Option<String>,
    pub text: String,
}

/// 検索キーワードを対話的に読み取る
pub trait SearchPrompt: Send + Sync {
    /// None は入力終了（EOF / quit）を表す
    fn read_search(&self) -> Result<Option<PromptInput>, Error>;
}
