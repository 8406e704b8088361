//! テスト用: 出力系ポートの記録スタブ

#[cfg(test)]
mod stub {
    use crate::domain::{AppTarget, OutputTarget, ResultRow, SearchQuery};
    use crate::ports::outbound::{
        AppLister, DocumentOpener, PromptInput, ResolveAppProfile, ResolvedApp, ResultPresenter,
        SearchPrompt, UserNotice,
    };
    use common::error::Error;
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// テスト用: 常に同じ ResolvedApp を返す Stub
    pub struct FixedAppResolver {
        app: ResolvedApp,
    }

    impl FixedAppResolver {
        pub fn new(app: ResolvedApp) -> Self {
            Self { app }
        }
    }

    impl ResolveAppProfile for FixedAppResolver {
        fn resolve(&self, _target: &AppTarget) -> Result<ResolvedApp, Error> {
            Ok(self.app.clone())
        }
    }

    impl AppLister for FixedAppResolver {
        fn list_apps(&self) -> Result<(Vec<String>, Option<String>), Error> {
            let name = self.app.name.clone().unwrap_or_else(|| "app".to_string());
            Ok((vec![name.clone()], Some(name)))
        }
    }

    /// テスト用: present 呼び出しを記録する Stub
    pub struct CapturePresenter {
        calls: Mutex<Vec<(SearchQuery, Vec<ResultRow>)>>,
        path: Option<PathBuf>,
    }

    impl CapturePresenter {
        /// present が返すパスを指定して作る（None は標準出力相当）
        pub fn new(path: Option<PathBuf>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                path,
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// 最後に present された (クエリ, 行) の組
        pub fn last_call(&self) -> Option<(SearchQuery, Vec<ResultRow>)> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    impl ResultPresenter for CapturePresenter {
        fn present(
            &self,
            query: &SearchQuery,
            rows: &[ResultRow],
            _output: &OutputTarget,
        ) -> Result<Option<PathBuf>, Error> {
            self.calls
                .lock()
                .unwrap()
                .push((query.clone(), rows.to_vec()));
            Ok(self.path.clone())
        }
    }

    /// テスト用: open 呼び出しを記録する Stub
    pub struct CaptureOpener {
        opened: Mutex<Vec<PathBuf>>,
    }

    impl CaptureOpener {
        pub fn new() -> Self {
            Self {
                opened: Mutex::new(Vec::new()),
            }
        }

        pub fn opened(&self) -> Vec<PathBuf> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl DocumentOpener for CaptureOpener {
        fn open(&self, path: &Path) -> Result<(), Error> {
            self.opened.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    /// テスト用: notify されたメッセージを記録する Stub
    pub struct CaptureNotice {
        messages: Mutex<Vec<String>>,
    }

    impl CaptureNotice {
        pub fn new() -> Self {
            Self {
                messages: Mutex::new(Vec::new()),
            }
        }

        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl UserNotice for CaptureNotice {
        fn notify(&self, message: &str) -> Result<(), Error> {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    /// テスト用: 与えた入力列を順に返すプロンプト Stub（尽きたら終了）
    pub struct ScriptedPrompt {
        inputs: Mutex<VecDeque<PromptInput>>,
    }

    impl ScriptedPrompt {
        pub fn new(inputs: Vec<PromptInput>) -> Self {
            Self {
                inputs: Mutex::new(inputs.into_iter().collect()),
            }
        }
    }

    impl SearchPrompt for ScriptedPrompt {
        fn read_search(&self) -> Result<Option<PromptInput>, Error> {
            Ok(self.inputs.lock().unwrap().pop_front())
        }
    }
}

#[cfg(test)]
pub use stub::{
    CaptureNotice, CaptureOpener, CapturePresenter, FixedAppResolver, ScriptedPrompt,
};
