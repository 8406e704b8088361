use crate::domain::{AppTarget, KsCommand, OutputTarget};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -L / --list-apps: apps.json のプロファイル一覧を表示
    pub list_apps: bool,
    /// --list-fields: 選択中アプリの検索可能フィールド一覧を表示
    pub list_fields: bool,
    /// -i / --interactive: 1 回フェッチして同じスナップショットを繰り返し検索
    pub interactive: bool,
    /// --no-open: 結果ドキュメントをブラウザで開かない
    pub no_open: bool,
    /// -v / --verbose: 不具合調査用の冗長ログを stderr に出力する
    pub verbose: bool,
    pub app: Option<String>,
    pub base_url: Option<String>,
    pub app_id: Option<u64>,
    pub field: Option<String>,
    pub output: Option<String>,
    pub query_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            list_apps: false,
            list_fields: false,
            interactive: false,
            no_open: false,
            verbose: false,
            app: None,
            base_url: None,
            app_id: None,
            field: None,
            output: None,
            query_words: Vec::new(),
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("ksearch")
        .about("Search kintone records and render the matches as an HTML table")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-apps")
                .short('L')
                .long("list-apps")
                .help("List app profiles from apps.json")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-fields")
                .long("list-fields")
                .help("List searchable fields of the selected app")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("app")
                .short('a')
                .long("app")
                .value_name("name")
                .help("Select an app profile from apps.json")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("url")
                .help("kintone base URL (use with --app-id)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("app-id")
                .long("app-id")
                .value_name("id")
                .help("kintone app ID (use with --base-url)")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("field")
                .short('f')
                .long("field")
                .value_name("field")
                .help("Field to search")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Write the result document to <path> ('-' for stdout)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("no-open")
                .long("no-open")
                .help("Do not open the result document in a browser")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Fetch once, then search repeatedly from a prompt")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose JSONL logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("Query text (words are joined with spaces)")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        list_apps: matches.get_flag("list-apps"),
        list_fields: matches.get_flag("list-fields"),
        interactive: matches.get_flag("interactive"),
        no_open: matches.get_flag("no-open"),
        verbose: matches.get_flag("verbose"),
        app: matches.get_one::<String>("app").cloned(),
        base_url: matches.get_one::<String>("base-url").cloned(),
        app_id: matches.get_one::<u64>("app-id").copied(),
        field: matches.get_one::<String>("field").cloned(),
        output: matches.get_one::<String>("output").cloned(),
        query_words: matches
            .get_many::<String>("positional")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// --base-url と --app-id は対でのみ使える
fn check_ad_hoc_target(config: &Config) -> Result<(), Error> {
    if config.base_url.is_some() != config.app_id.is_some() {
        return Err(Error::invalid_argument(
            "--base-url and --app-id must be used together",
        ));
    }
    Ok(())
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    let config = matches_to_config(&matches);
    check_ad_hoc_target(&config)?;
    Ok(ParseOutcome::Config(config))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    let config = matches_to_config(&matches);
    check_ad_hoc_target(&config)?;
    Ok(config)
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    emit_fallback_completion(shell);
}

fn emit_fallback_completion(shell: Shell) {
    let opts = "-h --help -L --list-apps --list-fields -a --app --base-url --app-id -f --field -o --output --no-open -i --interactive -v --verbose --generate";
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for ksearch (options only; query text is free-form)
_ksearch() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{opts}" -- "$cur"))
}}
complete -F _ksearch ksearch
"#,
                opts = opts
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for ksearch (options only; query text is free-form)
#compdef ksearch
local -a reply
reply=({opts})
_describe 'ksearch' reply
"#,
                opts = opts
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for ksearch (options only)
complete -c ksearch -l help -s h -d "Show help"
complete -c ksearch -l list-apps -s L -d "List app profiles"
complete -c ksearch -l list-fields -d "List searchable fields"
complete -c ksearch -l app -s a -d "App profile" -r
complete -c ksearch -l base-url -d "kintone base URL" -r
complete -c ksearch -l app-id -d "kintone app ID" -r
complete -c ksearch -l field -s f -d "Field to search" -r
complete -c ksearch -l output -s o -d "Result document path" -r
complete -c ksearch -l no-open -d "Do not open a browser"
complete -c ksearch -l interactive -s i -d "Interactive search session"
complete -c ksearch -l verbose -s v -d "Verbose logs to stderr"
complete -c ksearch -l generate -d "Generate completion script" -r -a "bash zsh fish"
"#
            );
        }
        _ => {}
    }
}

/// Config を KsCommand に変換する
pub fn config_to_command(config: Config) -> KsCommand {
    if config.help {
        return KsCommand::Help;
    }

    if config.list_apps {
        return KsCommand::ListApps;
    }

    let target = match (&config.base_url, config.app_id) {
        (Some(url), Some(id)) => AppTarget::AdHoc {
            base_url: url.clone(),
            app_id: id,
        },
        _ => AppTarget::Profile(config.app.clone()),
    };

    if config.list_fields {
        return KsCommand::ListFields { target };
    }

    let output = match config.output.as_deref() {
        Some("-") => OutputTarget::Stdout,
        Some(path) => OutputTarget::Path(PathBuf::from(path)),
        None => OutputTarget::StateDir,
    };
    let open = !config.no_open && !matches!(output, OutputTarget::Stdout);

    if config.interactive {
        return KsCommand::Interactive {
            target,
            output,
            open,
        };
    }

    KsCommand::Search {
        target,
        field: config.field,
        text: config.query_words.join(" "),
        output,
        open,
    }
}
