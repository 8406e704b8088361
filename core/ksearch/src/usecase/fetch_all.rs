//! レコード全件取得

use common::error::Error;
use common::kintone::{seek_query, RecordApi, PAGE_SIZE};
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use common::record::Record;
use std::collections::BTreeMap;
use std::sync::Arc;

/// $id シークでアプリの全レコードを取得する
///
/// offset ではなく「$id > 最終取得 ID」で次ページを要求するため、
/// kintone の offset 上限に影響されない。取得順は $id 昇順。
pub struct FetchAllRecords {
    api: Arc<dyn RecordApi>,
    log: Arc<dyn Log>,
}

impl FetchAllRecords {
    pub fn new(api: Arc<dyn RecordApi>, log: Arc<dyn Log>) -> Self {
        Self { api, log }
    }

    /// 全件を取得して $id 昇順のまま返す
    ///
    /// ページが PAGE_SIZE 件未満になったら終端。ページ数に上限は設けず、
    /// レコード総数に比例して API 呼び出しが増える。満杯ページの末尾に
    /// $id が無い場合は続行できないので Json エラーで打ち切る。
    pub fn run(&self) -> Result<Vec<Record>, Error> {
        let mut records: Vec<Record> = Vec::new();
        let mut cursor = None;
        let mut page_no: u64 = 0;
        loop {
            page_no += 1;
            let query = seek_query(cursor.as_ref(), PAGE_SIZE);
            let page = self.api.query_records(&query)?;
            let page_len = page.len();
            // 満杯ページのときだけ次のカーソルが要る。extend で所有権が移る前に取る。
            if page_len == PAGE_SIZE {
                cursor = Some(page.last().and_then(|r| r.id()).ok_or_else(|| {
                    Error::json("Record without $id; cannot continue pagination")
                })?);
            }
            records.extend(page);
            self.log_page(page_no, page_len, records.len());
            if page_len < PAGE_SIZE {
                break;
            }
        }
        let mut fields = BTreeMap::new();
        fields.insert("total".to_string(), serde_json::json!(records.len()));
        fields.insert("pages".to_string(), serde_json::json!(page_no));
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "fetch finished".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("fetch".to_string()),
            fields: Some(fields),
        });
        Ok(records)
    }

    fn log_page(&self, page_no: u64, page_len: usize, total: usize) {
        let mut fields = BTreeMap::new();
        fields.insert("page".to_string(), serde_json::json!(page_no));
        fields.insert("page_len".to_string(), serde_json::json!(page_len));
        fields.insert("total".to_string(), serde_json::json!(total));
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Debug,
            message: "page fetched".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("fetch".to_string()),
            fields: Some(fields),
        });
    }
}
