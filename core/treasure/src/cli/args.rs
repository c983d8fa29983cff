//! コマンドライン引数の解析

use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// --no-interactive: 名前プロンプトを出さない（追加は常にキャンセル扱い）
    pub non_interactive: bool,
    /// -p / --provider: プレイス検索プロバイダ（fixed / nominatim）
    pub provider: Option<String>,
    /// -l / --log-file: 診断ログ（JSONL）の出力先
    pub log_file: Option<PathBuf>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("treasure")
        .about("Browse, filter and extend a list of treasures on a map")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-interactive")
                .long("no-interactive")
                .help("Do not prompt for names; map taps are cancelled (CI-friendly)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("PROVIDER")
                .help("Place search provider: fixed (offline, default) or nominatim"),
        )
        .arg(
            clap::Arg::new("log-file")
                .short('l')
                .long("log-file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Append JSONL diagnostics to PATH (default: $TREASURE_LOG if set)"),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .help("Generate shell completion script (bash, zsh, fish)"),
        )
}

pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args())
}

fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(*shell));
    }

    Ok(ParseOutcome::Config(Config {
        help: matches.get_flag("help"),
        non_interactive: matches.get_flag("no-interactive"),
        provider: matches.get_one::<String>("provider").cloned(),
        log_file: matches.get_one::<PathBuf>("log-file").cloned(),
    }))
}

pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}
