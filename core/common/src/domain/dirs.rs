//! 実行時ディレクトリ（XDG / KSEARCH_HOME 解決結果）
//!
//! EnvResolver で解決し、設定ファイル・結果ドキュメント・ログのパス計算に使う。

use std::path::{Path, PathBuf};

/// 設定ホームディレクトリ（apps.json の置き場）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.0.join(rel)
    }
}

impl AsRef<Path> for HomeDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for HomeDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// 状態ディレクトリ（結果ドキュメントとログの置き場）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDir(PathBuf);

impl StateDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// 結果 HTML の出力先（state/results）
    pub fn results_dir(&self) -> PathBuf {
        self.0.join("results")
    }

    /// JSONL ログの出力先（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.0.join("logs")
    }
}

impl AsRef<Path> for StateDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for StateDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_dir_subdirs() {
        let state = StateDir::new("/tmp/ksearch-state");
        assert_eq!(state.results_dir(), PathBuf::from("/tmp/ksearch-state/results"));
        assert_eq!(state.logs_dir(), PathBuf::from("/tmp/ksearch-state/logs"));
    }
}
