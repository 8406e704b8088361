mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::KsCommand;
use ports::inbound::UseCaseRunner;
use usecase::app::SearchOutcome;
use wiring::{wire, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        let result: Result<i32, Error> = match cmd {
            KsCommand::Help => {
                print_help();
                Ok(0)
            }
            KsCommand::ListApps => {
                let (names, default) = self.app.search_use_case.list_apps()?;
                for name in &names {
                    if default.as_deref() == Some(name.as_str()) {
                        println!("{} (default)", name);
                    } else {
                        println!("{}", name);
                    }
                }
                Ok(0)
            }
            KsCommand::ListFields { target } => {
                let fields = self.app.search_use_case.list_fields(&target)?;
                for field in &fields {
                    println!("{}", field);
                }
                Ok(0)
            }
            KsCommand::Search {
                target,
                field,
                text,
                output,
                open,
            } => {
                if text.trim().is_empty() {
                    return Err(Error::invalid_argument(
                        "No query provided. Pass the search text as arguments.",
                    ));
                }
                let outcome = self.app.search_use_case.run_search(
                    &target,
                    field.as_deref(),
                    &text,
                    &output,
                    open,
                )?;
                match outcome {
                    SearchOutcome::NoMatches => {
                        println!("No records matched.");
                    }
                    SearchOutcome::Matched { count, path } => {
                        println!("{} records matched", count);
                        if let Some(path) = path {
                            println!("Results written to {}", path.display());
                        }
                    }
                }
                Ok(0)
            }
            KsCommand::Interactive {
                target,
                output,
                open,
            } => {
                self.app.search_use_case.run_interactive(&target, &output, open)?;
                Ok(0)
            }
        };
        let code = match &result {
            Ok(c) => *c,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn cmd_name_for_log(cmd: &KsCommand) -> &'static str {
    match cmd {
        KsCommand::Help => "help",
        KsCommand::ListApps => "list-apps",
        KsCommand::ListFields { .. } => "list-fields",
        KsCommand::Search { .. } => "search",
        KsCommand::Interactive { .. } => "interactive",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("ksearch: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: ksearch [options] [query...]");
}

fn print_help() {
    println!("Usage: ksearch [options] [query...]");
    println!("Options:");
    println!("  -h, --help              Show this help message");
    println!("  -L, --list-apps         List app profiles from apps.json");
    println!("      --list-fields       List searchable fields of the selected app");
    println!("  -a, --app <name>        Select an app profile from apps.json (default: KSEARCH_APP, then default_app)");
    println!("      --base-url <url>    kintone base URL (use with --app-id, instead of apps.json)");
    println!("      --app-id <id>       kintone app ID (use with --base-url)");
    println!("  -f, --field <field>     Field to search (default: default_field of the app profile)");
    println!("  -o, --output <path>     Write the result document to <path> ('-' for stdout)");
    println!("      --no-open           Do not open the result document in a browser");
    println!("  -i, --interactive       Fetch once, then search repeatedly from a prompt");
    println!("  -v, --verbose           Emit verbose JSONL logs to stderr (for troubleshooting)");
    println!("      --generate <shell>  Generate shell completion script (bash, zsh, fish). Source the output to enable tab completion.");
    println!();
    println!("Environment:");
    println!("  KINTONE_API_TOKEN   API token (or the variable named by api_token_env in apps.json)");
    println!("  KSEARCH_APP         App profile used when -a/--app is omitted");
    println!("  KSEARCH_HOME        Home directory. App profiles: $KSEARCH_HOME/config/apps.json");
    println!("                      If unset, $XDG_CONFIG_HOME/ksearch (e.g. ~/.config/ksearch) is used.");
    println!("  KSEARCH_STATE_DIR   Where result documents and logs are written.");
    println!("                      If unset, $XDG_STATE_HOME/ksearch (e.g. ~/.local/state/ksearch) is used.");
    println!();
    println!("Description:");
    println!("  Fetch all records of a kintone app, filter them by a field match, and");
    println!("  write the matching records as an HTML table with links back to kintone.");
    println!("  String fields match case-insensitively by substring; number fields match");
    println!("  by exact value; table fields match when any cell of any row matches.");
    println!();
    println!("Examples:");
    println!("  ksearch 東京");
    println!("  ksearch -f 顧客情報 田中");
    println!("  ksearch -a estimates -f 見積番号 M-2024");
    println!("  ksearch --list-fields");
    println!("  ksearch -i");
}
