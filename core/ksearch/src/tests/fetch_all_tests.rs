//! FetchAllRecords の単体テスト（StubRecordApi は adapter のテスト用実装を使用）

use std::sync::Arc;

use common::adapter::NoopLog;
use common::kintone::RecordApi;
use common::record::{FieldValue, Record};

use crate::adapter::stub_records::StubRecordApi;
use crate::usecase::fetch_all::FetchAllRecords;

fn record(id: u64, name: &str) -> Record {
    Record::new(vec![
        ("$id".to_string(), FieldValue::Text(id.to_string())),
        ("名称".to_string(), FieldValue::Text(name.to_string())),
    ])
}

fn page(start: u64, len: usize) -> Vec<Record> {
    (start..start + len as u64)
        .map(|id| record(id, &format!("レコード{}", id)))
        .collect()
}

fn fetch(api: &Arc<StubRecordApi>) -> FetchAllRecords {
    let api: Arc<dyn RecordApi> = api.clone();
    FetchAllRecords::new(api, Arc::new(NoopLog))
}

#[test]
fn test_fetch_paginates_until_short_page() {
    // 1200 件 = 500 + 500 + 200 の 3 ページ
    let api = Arc::new(StubRecordApi::new(vec![
        page(1, 500),
        page(501, 500),
        page(1001, 200),
    ]));
    let records = fetch(&api).run().unwrap();

    assert_eq!(records.len(), 1200);
    assert_eq!(
        api.issued(),
        vec![
            "order by $id asc limit 500".to_string(),
            "$id > 500 order by $id asc limit 500".to_string(),
            "$id > 1000 order by $id asc limit 500".to_string(),
        ]
    );

    // $id は全体で厳密に昇順
    let seqs: Vec<u64> = records
        .iter()
        .map(|r| r.id().unwrap().seq().unwrap())
        .collect();
    assert!(seqs.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(seqs.first(), Some(&1));
    assert_eq!(seqs.last(), Some(&1200));
}

#[test]
fn test_fetch_single_short_page_stops_after_one_call() {
    let api = Arc::new(StubRecordApi::new(vec![page(1, 3)]));
    let records = fetch(&api).run().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(api.call_count(), 1);
}

#[test]
fn test_fetch_empty_app() {
    let api = Arc::new(StubRecordApi::new(vec![vec![]]));
    let records = fetch(&api).run().unwrap();
    assert!(records.is_empty());
    assert_eq!(api.call_count(), 1);
}

#[test]
fn test_fetch_exact_page_multiple_needs_trailing_empty_page() {
    // ちょうど 1000 件のときは 3 回目の呼び出しが空ページを返して終端を知る
    let api = Arc::new(StubRecordApi::new(vec![
        page(1, 500),
        page(501, 500),
        vec![],
    ]));
    let records = fetch(&api).run().unwrap();
    assert_eq!(records.len(), 1000);
    assert_eq!(api.call_count(), 3);
}

#[test]
fn test_fetch_fails_when_full_page_lacks_id() {
    // 満杯ページの末尾に $id が無いと次のカーソルが取れない
    let mut broken = page(1, 500);
    broken[499] = Record::new(vec![(
        "名称".to_string(),
        FieldValue::Text("IDなし".to_string()),
    )]);
    let api = Arc::new(StubRecordApi::new(vec![broken]));
    let err = fetch(&api).run().unwrap_err();
    assert_eq!(err.exit_code(), 70);
    assert_eq!(api.call_count(), 1);
}
