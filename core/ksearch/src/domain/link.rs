//! 結果 URL（kintone 検索画面へのディープリンク）

use common::error::Error;
use common::kintone::AppId;
use regex::Regex;

/// base_url からスキーム + ホストを取り出す（パス以下は捨てる）
pub fn host_origin(base_url: &str) -> Result<String, Error> {
    let re = Regex::new(r"^(https?://[^/]+)").map_err(|e| Error::config(e.to_string()))?;
    re.captures(base_url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::config(format!("Invalid base URL: {}", base_url)))
}

/// kintone 検索画面へのディープリンクを組み立てる
pub fn search_link(origin: &str, app: AppId, keyword: &str) -> String {
    format!(
        "{}/k/search?keyword={}&sortOrder=DATETIME&app={}",
        origin,
        encode_uri_component(keyword),
        app
    )
}

/// encodeURIComponent 互換のパーセントエンコード
///
/// 英数字と `- _ . ! ~ * ' ( )` 以外は UTF-8 バイト単位で %XX（大文字）。
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
