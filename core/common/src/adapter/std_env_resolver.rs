//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{HomeDir, StateDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn app_name_from_env(&self) -> Option<String> {
        non_empty_var("KSEARCH_APP")
    }

    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = non_empty_var("KSEARCH_HOME") {
            return Ok(HomeDir::new(PathBuf::from(home)));
        }

        let config_base = non_empty_var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty_var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(HomeDir::new(config_base.join("ksearch")))
    }

    fn resolve_apps_config_path(&self) -> Result<PathBuf, Error> {
        if let Some(home) = non_empty_var("KSEARCH_HOME") {
            return Ok(PathBuf::from(home).join("config").join("apps.json"));
        }
        Ok(self.resolve_home_dir()?.join("apps.json"))
    }

    fn resolve_state_dir(&self) -> Result<StateDir, Error> {
        if let Some(dir) = non_empty_var("KSEARCH_STATE_DIR") {
            return Ok(StateDir::new(PathBuf::from(dir)));
        }

        let state_base = non_empty_var("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                non_empty_var("HOME").map(|h| PathBuf::from(h).join(".local").join("state"))
            })
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(StateDir::new(state_base.join("ksearch")))
    }

    fn api_token(&self, env_name: &str) -> Result<String, Error> {
        non_empty_var(env_name)
            .ok_or_else(|| Error::env(format!("{} environment variable is not set", env_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 環境変数はプロセス全体で共有なので、復元まで 1 テスト内で行う

    #[test]
    fn test_resolve_home_dir_priority() {
        let saved_home = env::var("KSEARCH_HOME").ok();
        let saved_xdg = env::var("XDG_CONFIG_HOME").ok();

        env::set_var("KSEARCH_HOME", "/tmp/ksearch-home");
        let resolver = StdEnvResolver;
        assert_eq!(
            resolver.resolve_home_dir().unwrap().as_path(),
            PathBuf::from("/tmp/ksearch-home").as_path()
        );
        assert_eq!(
            resolver.resolve_apps_config_path().unwrap(),
            PathBuf::from("/tmp/ksearch-home/config/apps.json")
        );

        env::remove_var("KSEARCH_HOME");
        env::set_var("XDG_CONFIG_HOME", "/tmp/xdg");
        assert_eq!(
            resolver.resolve_home_dir().unwrap().as_path(),
            PathBuf::from("/tmp/xdg/ksearch").as_path()
        );
        assert_eq!(
            resolver.resolve_apps_config_path().unwrap(),
            PathBuf::from("/tmp/xdg/ksearch/apps.json")
        );

        match saved_home {
            Some(v) => env::set_var("KSEARCH_HOME", v),
            None => env::remove_var("KSEARCH_HOME"),
        }
        match saved_xdg {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    fn test_api_token_reads_named_var() {
        env::set_var("KSEARCH_TEST_TOKEN", "secret");
        let resolver = StdEnvResolver;
        assert_eq!(resolver.api_token("KSEARCH_TEST_TOKEN").unwrap(), "secret");
        env::remove_var("KSEARCH_TEST_TOKEN");

        let err = resolver.api_token("KSEARCH_TEST_TOKEN_MISSING").unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }
}
