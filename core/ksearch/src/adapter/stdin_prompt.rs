//! 対話モードの標準入力プロンプト
//!
//! `フィールド:キーワード` または `キーワード` を 1 行ずつ読む。
//! EOF・空行・quit で終了。

use crate::ports::outbound::{PromptInput, SearchPrompt};
use common::error::Error;
use std::io::{self, BufRead, Write};

/// 標準入出力で検索キーワードを読み取る実装
pub struct StdinSearchPrompt;

impl StdinSearchPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinSearchPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPrompt for StdinSearchPrompt {
    fn read_search(&self) -> Result<Option<PromptInput>, Error> {
        eprint!("search> ");
        let _ = io::stderr().flush();

        let stdin = io::stdin();
        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(e.to_string()))?;
        if read == 0 {
            // EOF
            return Ok(None);
        }
        let line = line.trim();
        if line.is_empty() || line == "q" || line == "quit" {
            return Ok(None);
        }
        Ok(Some(parse_prompt_line(line)))
    }
}

/// `フィールド:キーワード` を分解する。コロンが無い・どちらかが空の行は
/// 全体をキーワードとして扱う。
fn parse_prompt_line(line: &str) -> PromptInput {
    if let Some((field, text)) = line.split_once(':') {
        let field = field.trim();
        let text = text.trim();
        if !field.is_empty() && !text.is_empty() {
            return PromptInput {
                field_id: Some(field.to_string()),
                text: text.to_string(),
            };
        }
    }
    PromptInput {
        field_id: None,
        text: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_keyword() {
        let input = parse_prompt_line("東京");
        assert_eq!(input.field_id, None);
        assert_eq!(input.text, "東京");
    }

    #[test]
    fn test_parse_field_and_keyword() {
        let input = parse_prompt_line("見積番号: M-2024");
        assert_eq!(input.field_id.as_deref(), Some("見積番号"));
        assert_eq!(input.text, "M-2024");
    }

    #[test]
    fn test_parse_degenerate_colon_lines() {
        // フィールド側が空なら行全体をキーワード扱い
        assert_eq!(parse_prompt_line(": 東京").field_id, None);
        assert_eq!(parse_prompt_line("名称:").field_id, None);
        // 2 個目以降のコロンはキーワードの一部
        let input = parse_prompt_line("URL: https://example.com");
        assert_eq!(input.field_id.as_deref(), Some("URL"));
        assert_eq!(input.text, "https://example.com");
    }
}
