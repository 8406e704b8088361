//! apps.json 用の設定型
//!
//! プロファイル名から接続先（base_url / app）と検索既定値
//! （default_field / title_field）を解決するための構造体。
//! API トークン自体はファイルに置かず、環境変数名だけを持つ。

use super::AppId;
use serde::Deserialize;
use std::collections::HashMap;

/// api_token_env 省略時に使う環境変数名
pub const DEFAULT_API_TOKEN_ENV: &str = "KINTONE_API_TOKEN";

/// apps.json のルート
#[derive(Debug, Clone, Default)]
pub struct AppsConfig {
    /// 未指定時に使うアプリプロファイル名
    pub default_app: Option<String>,
    /// プロファイル名 -> アプリプロファイル
    pub apps: HashMap<String, AppProfile>,
}

/// 1 アプリ分の設定
#[derive(Debug, Clone)]
pub struct AppProfile {
    /// kintone のベース URL（例: https://example.cybozu.com）
    pub base_url: String,
    /// アプリ ID
    pub app: AppId,
    /// API トークンを読む環境変数名（省略時は KINTONE_API_TOKEN）
    pub api_token_env: Option<String>,
    /// -f 省略時に検索するフィールド
    pub default_field: Option<String>,
    /// 結果 URL のキーワードに使う代表フィールド（省略時は default_field）
    pub title_field: Option<String>,
}

impl AppProfile {
    /// API トークンを読む環境変数名
    pub fn token_env_name(&self) -> &str {
        self.api_token_env.as_deref().unwrap_or(DEFAULT_API_TOKEN_ENV)
    }

    /// 代表フィールド（未設定なら default_field に委ねる）
    pub fn title_field_or_default(&self) -> Option<&str> {
        self.title_field
            .as_deref()
            .or(self.default_field.as_deref())
    }
}

/// serde 用の内部構造
#[derive(Debug, Deserialize)]
struct AppsConfigRaw {
    #[serde(alias = "default")]
    default_app: Option<String>,
    apps: Option<HashMap<String, AppProfileRaw>>,
}

#[derive(Debug, Deserialize)]
struct AppProfileRaw {
    base_url: String,
    #[serde(alias = "app_id")]
    app: u64,
    #[serde(alias = "token_env")]
    api_token_env: Option<String>,
    default_field: Option<String>,
    title_field: Option<String>,
}

impl From<AppProfileRaw> for AppProfile {
    fn from(r: AppProfileRaw) -> Self {
        AppProfile {
            base_url: r.base_url,
            app: AppId::new(r.app),
            api_token_env: r.api_token_env,
            default_field: r.default_field,
            title_field: r.title_field,
        }
    }
}

impl AppsConfig {
    /// JSON 文字列からパース（ファイル読みは呼び出し側で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: AppsConfigRaw = serde_json::from_str(json)?;
        let apps = raw
            .apps
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k, v.into()))
            .collect();
        Ok(AppsConfig {
            default_app: raw.default_app,
            apps,
        })
    }
}
