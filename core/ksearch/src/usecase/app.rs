//! コマンド実行のオーケストレーション

use crate::domain::fields::selectable_fields;
use crate::domain::link::host_origin;
use crate::domain::{AppTarget, OutputTarget, SearchQuery};
use crate::ports::outbound::{
    AppLister, DocumentOpener, RecordApiFactory, ResolveAppProfile, ResolvedApp, ResultPresenter,
    SearchPrompt, UserNotice,
};
use crate::usecase::fetch_all::FetchAllRecords;
use crate::usecase::search::{search, SearchContext};
use common::error::Error;
use common::kintone::seek_query;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use common::record::Record;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct KsDeps {
    pub search: SearchDeps,
    pub output: OutputDeps,
    pub obs: ObsDeps,
}

pub struct SearchDeps {
    pub resolve_app: Arc<dyn ResolveAppProfile>,
    pub api_factory: Arc<dyn RecordApiFactory>,
    pub app_lister: Arc<dyn AppLister>,
}

pub struct OutputDeps {
    pub presenter: Arc<dyn ResultPresenter>,
    pub opener: Arc<dyn DocumentOpener>,
    pub notice: Arc<dyn UserNotice>,
    pub prompt: Arc<dyn SearchPrompt>,
}

pub struct ObsDeps {
    pub log: Arc<dyn Log>,
}

/// 検索 1 回分の結果
#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    /// 1 件もヒットしなかった（ドキュメントは出力しない）
    NoMatches,
    Matched { count: usize, path: Option<PathBuf> },
}

/// ksearch のユースケース（アダプター経由で I/O を行う）
pub struct SearchUseCase {
    deps: KsDeps,
}

impl SearchUseCase {
    pub fn new(deps: KsDeps) -> Self {
        Self { deps }
    }

    /// 設定済みアプリ一覧を返す（ソート済み名前リストとデフォルト名）。
    /// 表示は CLI の責務のため、usecase はデータのみ返す。
    pub fn list_apps(&self) -> Result<(Vec<String>, Option<String>), Error> {
        self.deps.search.app_lister.list_apps()
    }

    /// 検索対象にできるフィールド一覧を返す。
    /// フィールド構成は先頭 1 件だけ取得すれば分かる。
    pub fn list_fields(&self, target: &AppTarget) -> Result<Vec<String>, Error> {
        let app = self.deps.search.resolve_app.resolve(target)?;
        let api = self.deps.search.api_factory.for_app(&app);
        let records = api.query_records(&seek_query(None, 1))?;
        Ok(selectable_fields(&records))
    }

    /// 全件取得して 1 回検索する
    pub fn run_search(
        &self,
        target: &AppTarget,
        field: Option<&str>,
        text: &str,
        output: &OutputTarget,
        open: bool,
    ) -> Result<SearchOutcome, Error> {
        let app = self.deps.search.resolve_app.resolve(target)?;
        let field_id = self.determine_field(field, &app)?;
        let query = SearchQuery::new(field_id, text);
        // 通信前に検証する。全ページ取得してから弾いては遅い。
        query.validate()?;
        let api = self.deps.search.api_factory.for_app(&app);
        let records = FetchAllRecords::new(api, Arc::clone(&self.deps.obs.log)).run()?;
        self.search_snapshot(&app, &query, &records, output, open)
    }

    /// 全件を 1 回だけ取得し、プロンプトから繰り返し検索する
    pub fn run_interactive(
        &self,
        target: &AppTarget,
        output: &OutputTarget,
        open: bool,
    ) -> Result<(), Error> {
        let app = self.deps.search.resolve_app.resolve(target)?;
        let api = self.deps.search.api_factory.for_app(&app);
        let records = FetchAllRecords::new(api, Arc::clone(&self.deps.obs.log)).run()?;
        let fields = selectable_fields(&records);
        self.deps.output.notice.notify(&format!(
            "Loaded {} records. Fields: {}",
            records.len(),
            fields.join(", ")
        ))?;
        loop {
            let input = match self.deps.output.prompt.read_search()? {
                Some(input) => input,
                None => break,
            };
            let field_id = match self.determine_field(input.field_id.as_deref(), &app) {
                Ok(f) => f,
                Err(e) => {
                    self.deps.output.notice.notify(&e.to_string())?;
                    continue;
                }
            };
            let query = SearchQuery::new(field_id, input.text);
            match self.search_snapshot(&app, &query, &records, output, open) {
                Ok(SearchOutcome::NoMatches) => {
                    self.deps.output.notice.notify("No records matched.")?;
                }
                Ok(SearchOutcome::Matched { count, path }) => {
                    let message = match path {
                        Some(p) => {
                            format!("{} records matched. Results written to {}", count, p.display())
                        }
                        None => format!("{} records matched", count),
                    };
                    self.deps.output.notice.notify(&message)?;
                }
                // 入力起因のエラーは案内して次の入力へ。通信・IO エラーは中断。
                Err(e) if e.is_validation() || e.is_usage() => {
                    self.deps.output.notice.notify(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// -f 指定 → プロファイルの default_field の順で検索フィールドを決める
    fn determine_field(&self, cli_field: Option<&str>, app: &ResolvedApp) -> Result<String, Error> {
        cli_field
            .map(str::to_string)
            .or_else(|| app.default_field.clone())
            .ok_or_else(|| {
                Error::invalid_argument(
                    "No field specified. Pass -f/--field or set default_field in apps.json.",
                )
            })
    }

    /// 取得済みレコード列に対する検索 1 回分（検索・出力・ブラウザ起動）
    fn search_snapshot(
        &self,
        app: &ResolvedApp,
        query: &SearchQuery,
        records: &[Record],
        output: &OutputTarget,
        open: bool,
    ) -> Result<SearchOutcome, Error> {
        let projected = selectable_fields(records);
        if !records.is_empty() && !projected.iter().any(|f| f == query.field_id()) {
            return Err(Error::invalid_argument(format!(
                "Unknown field '{}'. Available fields: {}",
                query.field_id(),
                projected.join(", ")
            )));
        }
        let origin = host_origin(&app.base_url)?;
        let ctx = SearchContext {
            origin: &origin,
            app: app.app,
            title_field: app.title_field.as_deref(),
            projected_fields: &projected,
        };
        let rows = search(query, records, &ctx)?;
        self.log_search(query, records.len(), rows.len());
        if rows.is_empty() {
            return Ok(SearchOutcome::NoMatches);
        }
        let path = self.deps.output.presenter.present(query, &rows, output)?;
        if open {
            if let Some(ref p) = path {
                // 開けなくても結果は出力済みなので中断しない
                let _ = self.deps.output.opener.open(p);
            }
        }
        Ok(SearchOutcome::Matched {
            count: rows.len(),
            path,
        })
    }

    fn log_search(&self, query: &SearchQuery, total: usize, matched: usize) {
        let mut fields = BTreeMap::new();
        fields.insert("field".to_string(), serde_json::json!(query.field_id()));
        fields.insert("total".to_string(), serde_json::json!(total));
        fields.insert("matched".to_string(), serde_json::json!(matched));
        let _ = self.deps.obs.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "search finished".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("search".to_string()),
            fields: Some(fields),
        });
    }
}
