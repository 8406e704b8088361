//! kintone records API クライアント（blocking HTTP）

use crate::error::Error;
use crate::kintone::api::RecordApi;
use crate::kintone::AppId;
use crate::record::Record;
use serde_json::Value;

/// records API クライアント
///
/// 認証は `X-Cybozu-API-Token` ヘッダのみ（セッション管理はホスト側の責務）。
pub struct KintoneClient {
    base_url: String,
    app: AppId,
    api_token: String,
}

impl KintoneClient {
    pub fn new(base_url: impl Into<String>, app: AppId, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            app,
            api_token: api_token.into(),
        }
    }

    fn records_url(&self) -> String {
        format!("{}/k/v1/records.json", self.base_url)
    }
}

impl RecordApi for KintoneClient {
    fn query_records(&self, query: &str) -> Result<Vec<Record>, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .get(self.records_url())
            .header("X-Cybozu-API-Token", &self.api_token)
            .query(&[("app", self.app.to_string()), ("query", query.to_string())])
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("kintone API error: {}", error_msg)));
        }

        parse_records_response(&response_text)
    }
}

/// records API レスポンス（`{ "records": [...] }`）をレコード列に変換する
fn parse_records_response(json: &str) -> Result<Vec<Record>, Error> {
    let v: Value = serde_json::from_str(json)
        .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
    let records = v["records"]
        .as_array()
        .ok_or_else(|| Error::json("Response has no records array".to_string()))?;
    records.iter().map(Record::from_json).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_url_trims_trailing_slash() {
        let client = KintoneClient::new("https://example.cybozu.com/", AppId::new(12), "token");
        assert_eq!(
            client.records_url(),
            "https://example.cybozu.com/k/v1/records.json"
        );
    }

    #[test]
    fn test_parse_records_response() {
        let json = r#"{
            "records": [
                {
                    "$id": { "type": "__ID__", "value": "1" },
                    "名称": { "type": "SINGLE_LINE_TEXT", "value": "東京" }
                },
                {
                    "$id": { "type": "__ID__", "value": "2" },
                    "名称": { "type": "SINGLE_LINE_TEXT", "value": "大阪" }
                }
            ]
        }"#;
        let records = parse_records_response(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id().unwrap().as_str(), "1");
        assert_eq!(records[1].id().unwrap().as_str(), "2");
    }

    #[test]
    fn test_parse_records_response_empty_page() {
        let records = parse_records_response(r#"{ "records": [] }"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_records_response_missing_records() {
        let err = parse_records_response("{}").unwrap_err();
        assert_eq!(err.exit_code(), 70);
    }

    #[test]
    fn test_parse_records_response_invalid_json() {
        assert!(parse_records_response("not json").is_err());
    }
}
