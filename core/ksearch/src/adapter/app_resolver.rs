//! apps.json と環境変数から接続先アプリを解決するアダプター
//!
//! usecase は ResolveAppProfile / AppLister trait 経由でのみ利用する。

use crate::domain::AppTarget;
use crate::ports::outbound::{AppLister, ResolveAppProfile, ResolvedApp};
use common::error::Error;
use common::kintone::config::DEFAULT_API_TOKEN_ENV;
use common::kintone::{AppId, AppsConfig};
use common::ports::outbound::{EnvResolver, FileSystem};
use std::sync::Arc;

/// apps.json（ファイル）と環境変数（トークン・プロファイル名）で解決する実装
pub struct StdAppResolver {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
}

impl StdAppResolver {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<dyn EnvResolver>) -> Self {
        Self { fs, env }
    }

    fn load_config(&self) -> Result<AppsConfig, Error> {
        let path = self.env.resolve_apps_config_path()?;
        if !self.fs.exists(&path) {
            return Err(Error::config(format!(
                "App config not found: {} (create apps.json or use --base-url/--app-id)",
                path.display()
            )));
        }
        let json = self.fs.read_to_string(&path)?;
        AppsConfig::parse(&json)
            .map_err(|e| Error::config(format!("Invalid app config {}: {}", path.display(), e)))
    }

    fn resolve_profile(&self, name: Option<&str>) -> Result<ResolvedApp, Error> {
        let config = self.load_config()?;
        let name = name
            .map(str::to_string)
            .or_else(|| self.env.app_name_from_env())
            .or_else(|| config.default_app.clone())
            .ok_or_else(|| {
                Error::config(
                    "No app selected. Pass -a/--app, set KSEARCH_APP, or set default_app in apps.json.",
                )
            })?;
        let profile = config
            .apps
            .get(&name)
            .ok_or_else(|| Error::config(format!("Unknown app profile '{}'", name)))?;
        let api_token = self.env.api_token(profile.token_env_name())?;
        Ok(ResolvedApp {
            name: Some(name),
            base_url: profile.base_url.clone(),
            app: profile.app,
            api_token,
            default_field: profile.default_field.clone(),
            title_field: profile.title_field_or_default().map(str::to_string),
        })
    }
}

impl ResolveAppProfile for StdAppResolver {
    fn resolve(&self, target: &AppTarget) -> Result<ResolvedApp, Error> {
        match target {
            AppTarget::Profile(name) => self.resolve_profile(name.as_deref()),
            AppTarget::AdHoc { base_url, app_id } => {
                // アドホック指定ではプロファイルが無いのでトークンは既定の環境変数から読む
                let api_token = self.env.api_token(DEFAULT_API_TOKEN_ENV)?;
                Ok(ResolvedApp {
                    name: None,
                    base_url: base_url.clone(),
                    app: AppId::new(*app_id),
                    api_token,
                    default_field: None,
                    title_field: None,
                })
            }
        }
    }
}

impl AppLister for StdAppResolver {
    fn list_apps(&self) -> Result<(Vec<String>, Option<String>), Error> {
        let config = self.load_config()?;
        let mut names: Vec<String> = config.apps.keys().cloned().collect();
        names.sort();
        Ok((names, config.default_app))
    }
}
