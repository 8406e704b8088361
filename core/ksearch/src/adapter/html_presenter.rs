//! 検索結果を HTML テーブルとして出力するアダプター
//!
//! Bootstrap の CDN を参照する単一ファイルの HTML を書き出す。
//! 列は先頭行のフィールド順に従い、結果 URL 列を最後に足す。

use crate::domain::result::RESULT_URL_FIELD;
use crate::domain::{OutputTarget, ResultRow, SearchQuery};
use crate::ports::outbound::ResultPresenter;
use common::error::Error;
use common::ports::outbound::{now_file_stamp, EnvResolver, FileSystem};
use common::record::FieldValue;
use std::path::PathBuf;
use std::sync::Arc;

/// 見出しにこれを含む列は表に出さない（内部管理用フィールド）
const HIDDEN_FIELD_MARKERS: [&str; 2] = ["案件", "レコード"];
/// 添付ファイルはセルに展開できないので列ごと出さない
const HIDDEN_FIELD_ATTACHMENT: &str = "添付ファイル";

/// 顧客情報サブテーブルは先頭行を会社名 + 担当者リンクに合成して表示する
const CUSTOMER_INFO_FIELD: &str = "顧客情報";
const CUSTOMER_COMPANY_FIELD: &str = "顧客情報_企業";
const CUSTOMER_NAME_FIELD: &str = "顧客情報_担当者氏名";
const CUSTOMER_MAIL_FIELD: &str = "顧客情報_担当者Mail";

/// 値が無い・表示に合成できないセルの表示
const EMPTY_CELL: &str = "-";

const BOOTSTRAP_CSS: &str =
    "https://stackpath.bootstrapcdn.com/bootstrap/4.3.1/css/bootstrap.min.css";
const BOOTSTRAP_CSS_INTEGRITY: &str =
    "sha384-ggOyR0iXCbMQv3Xipma34MD+dH/1fQ784/j6cY/iJTQUOhcWr7x9JvoRxT2MZw1T";

/// HTML ドキュメントを書き出す ResultPresenter 実装
pub struct HtmlPresenter {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
}

impl HtmlPresenter {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<dyn EnvResolver>) -> Self {
        Self { fs, env }
    }

    /// 状態ディレクトリ配下の出力先（results/result-YYYYMMDD-HHMMSS.html）
    fn output_path(&self) -> Result<PathBuf, Error> {
        let state = self.env.resolve_state_dir()?;
        let dir = state.results_dir();
        self.fs.create_dir_all(&dir)?;
        Ok(dir.join(format!("result-{}.html", now_file_stamp())))
    }
}

impl ResultPresenter for HtmlPresenter {
    fn present(
        &self,
        query: &SearchQuery,
        rows: &[ResultRow],
        output: &OutputTarget,
    ) -> Result<Option<PathBuf>, Error> {
        let doc = render_document(query, rows);
        match output {
            OutputTarget::Stdout => {
                println!("{}", doc);
                Ok(None)
            }
            OutputTarget::Path(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        self.fs.create_dir_all(parent)?;
                    }
                }
                self.fs.write(path, &doc)?;
                Ok(Some(path.clone()))
            }
            OutputTarget::StateDir => {
                let path = self.output_path()?;
                self.fs.write(&path, &doc)?;
                Ok(Some(path))
            }
        }
    }
}

/// 検索結果 1 回分を完結した HTML 文書にする
pub fn render_document(query: &SearchQuery, rows: &[ResultRow]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\"/>\n");
    html.push_str("<title>kintone | 検索結果</title>\n");
    html.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\" integrity=\"{}\" crossorigin=\"anonymous\"/>\n",
        BOOTSTRAP_CSS, BOOTSTRAP_CSS_INTEGRITY
    ));
    html.push_str("</head>\n<body>\n<div class=\"container-fluid\">\n");
    html.push_str(&format!(
        "<h1 style=\"text-align:center;\">FIELD: <span class=\"search-info\">{}</span> | QUERY: <span class=\"search-info\">{}</span></h1>\n",
        html_escape(query.field_id()),
        html_escape(query.text())
    ));
    html.push_str(&format!(
        "<p><span style=\"font-weight:bold;\">{}個</span>のレコードが見つかりました。</p>\n",
        rows.len()
    ));
    render_table(&mut html, rows);
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_table(html: &mut String, rows: &[ResultRow]) {
    let headers = visible_fields(rows);
    html.push_str("<table class=\"table table-striped table-hover\">\n<thead class=\"thead-dark\">\n<tr>");
    for header in &headers {
        html.push_str(&format!("<th scope=\"col\">{}</th>", html_escape(header)));
    }
    html.push_str("<th scope=\"col\">");
    html.push_str(RESULT_URL_FIELD);
    html.push_str("</th></tr>\n</thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for header in &headers {
            html.push_str(&format!("<td>{}</td>", cell_html(header, row.get(header))));
        }
        html.push_str(&format!(
            "<td><a href=\"{}\" target=\"_blank\">リンク</a></td>",
            html_escape(row.url())
        ));
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
}

/// 表に出す列（先頭行のフィールド順、内部管理用は除外）
fn visible_fields(rows: &[ResultRow]) -> Vec<String> {
    rows.first()
        .map(|row| {
            row.field_ids()
                .into_iter()
                .filter(|id| !is_hidden_field(id))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn is_hidden_field(field_id: &str) -> bool {
    HIDDEN_FIELD_MARKERS.iter().any(|m| field_id.contains(m))
        || field_id == HIDDEN_FIELD_ATTACHMENT
}

fn cell_html(field_id: &str, value: Option<&FieldValue>) -> String {
    if field_id == CUSTOMER_INFO_FIELD {
        return customer_info_html(value);
    }
    value
        .and_then(FieldValue::scalar_string)
        .filter(|s| !s.is_empty())
        .map(|s| html_escape(&s))
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// 顧客情報セル: 先頭行の企業名と担当者の mailto リンクを 2 行で表示する。
/// サブテーブルでない・行が無い・3 列とも空のときは "-"。
fn customer_info_html(value: Option<&FieldValue>) -> String {
    let rows = match value {
        Some(FieldValue::Table(rows)) => rows,
        _ => return EMPTY_CELL.to_string(),
    };
    let row = match rows.first() {
        Some(row) => row,
        None => return EMPTY_CELL.to_string(),
    };
    let part = |field: &str| {
        row.get(field)
            .and_then(FieldValue::scalar_string)
            .unwrap_or_default()
    };
    let company = part(CUSTOMER_COMPANY_FIELD);
    let name = part(CUSTOMER_NAME_FIELD);
    let mail = part(CUSTOMER_MAIL_FIELD);
    if company.is_empty() && name.is_empty() && mail.is_empty() {
        return EMPTY_CELL.to_string();
    }
    format!(
        "{}<br><a href=\"mailto:{}\">{}</a>",
        html_escape(&company),
        html_escape(&mail),
        html_escape(&name)
    )
}

/// レコード値は信用しない。テキストはすべてエスケープして埋め込む。
fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
