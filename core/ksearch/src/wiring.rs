//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    CompositeLog, FileJsonLog, NoopLog, StderrJsonLog, StdEnvResolver, StdFileSystem,
};
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{
    BrowserOpener, ConsoleNotice, HtmlPresenter, KintoneApiFactory, StdAppResolver,
    StdinSearchPrompt,
};
use crate::ports::outbound::{AppLister, ResolveAppProfile};
use crate::usecase::app::{KsDeps, ObsDeps, OutputDeps, SearchDeps, SearchUseCase};

/// 組み立て済みアプリケーション
pub struct App {
    pub search_use_case: SearchUseCase,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで SearchUseCase を組み立てる
pub fn wire(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger = build_logger(Arc::clone(&fs), env.as_ref(), verbose);

    let resolver = Arc::new(StdAppResolver::new(Arc::clone(&fs), Arc::clone(&env)));
    let resolve_app: Arc<dyn ResolveAppProfile> = resolver.clone();
    let app_lister: Arc<dyn AppLister> = resolver;

    let deps = KsDeps {
        search: SearchDeps {
            resolve_app,
            api_factory: Arc::new(KintoneApiFactory::new()),
            app_lister,
        },
        output: OutputDeps {
            presenter: Arc::new(HtmlPresenter::new(Arc::clone(&fs), Arc::clone(&env))),
            opener: Arc::new(BrowserOpener::new()),
            notice: Arc::new(ConsoleNotice::new()),
            prompt: Arc::new(StdinSearchPrompt::new()),
        },
        obs: ObsDeps {
            log: Arc::clone(&logger),
        },
    };
    App {
        search_use_case: SearchUseCase::new(deps),
        logger,
    }
}

/// ログ先の決定。状態ディレクトリが解決できればファイルへ JSONL、
/// -v なら stderr にも重ねる。どちらも無ければ何も出さない。
fn build_logger(fs: Arc<dyn FileSystem>, env: &dyn EnvResolver, verbose: bool) -> Arc<dyn Log> {
    let file_log = env.resolve_state_dir().ok().map(|state| {
        let path = state.logs_dir().join("ksearch.log.jsonl");
        Arc::new(FileJsonLog::new(fs, path)) as Arc<dyn Log>
    });
    match (file_log, verbose) {
        (Some(file), true) => Arc::new(CompositeLog::new(vec![file, Arc::new(StderrJsonLog)])),
        (Some(file), false) => file,
        (None, true) => Arc::new(StderrJsonLog),
        (None, false) => Arc::new(NoopLog),
    }
}
