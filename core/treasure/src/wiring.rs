//! 配線: 標準アダプタでスクリーンを組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdFileSystem, StdProcess};
use common::error::Error;
use common::places::{create_provider, ProviderType};
use common::point_id::StdIdGenerator;
use common::ports::outbound::{DiagnosticLog, FileSystem, Process};

use crate::adapter::{
    CliNamePrompt, ConsoleMapCanvas, ConsoleRowView, ConsoleShareSink, EnvLocationProvider,
    NoNamePrompt, NoopInterruptChecker, ProcessNavigationLauncher, SigintChecker,
};
use crate::cli::Config;
use crate::ports::outbound::{InterruptChecker, NamePrompt};
use crate::usecase::{ObsDeps, PolicyDeps, ScreenDeps, ServiceDeps, TreasureScreen, ViewDeps};

/// 組み立て済みアプリケーション
pub struct App {
    pub screen: TreasureScreen,
    pub log: Arc<dyn DiagnosticLog>,
    pub interrupt: Arc<dyn InterruptChecker>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App").finish_non_exhaustive()
    }
}

/// 配線: 標準アダプタで TreasureScreen を組み立てる
pub fn wire_screen(config: &Config) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let log: Arc<dyn DiagnosticLog> = match log_path(config) {
        Some(path) => Arc::new(FileJsonLog::new(Arc::clone(&fs), path)),
        None => Arc::new(NoopLog),
    };

    let provider_type = match &config.provider {
        Some(s) => ProviderType::parse(s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown provider: {}. Supported providers: fixed, nominatim",
                s
            ))
        })?,
        None => ProviderType::Fixed,
    };
    let places = create_provider(provider_type, None);

    let process: Arc<dyn Process> = Arc::new(StdProcess);
    let name_prompt: Arc<dyn NamePrompt> = if config.non_interactive {
        Arc::new(NoNamePrompt::new())
    } else {
        Arc::new(CliNamePrompt::new())
    };
    let interrupt: Arc<dyn InterruptChecker> = match SigintChecker::new() {
        Ok(checker) => Arc::new(checker),
        Err(_) => Arc::new(NoopInterruptChecker),
    };

    let deps = ScreenDeps {
        views: ViewDeps {
            rows: Arc::new(ConsoleRowView),
            share: Arc::new(ConsoleShareSink),
        },
        services: ServiceDeps {
            places,
            location: Arc::new(EnvLocationProvider),
            navigation: Arc::new(ProcessNavigationLauncher::new(process)),
        },
        policy: PolicyDeps {
            name_prompt,
            id_gen: Arc::new(StdIdGenerator),
        },
        obs: ObsDeps {
            log: Arc::clone(&log),
        },
    };
    let screen = TreasureScreen::new(Arc::new(ConsoleMapCanvas), deps);
    Ok(App {
        screen,
        log,
        interrupt,
    })
}

/// ログ出力先: --log-file > TREASURE_LOG > なし
fn log_path(config: &Config) -> Option<PathBuf> {
    config.log_file.clone().or_else(|| {
        std::env::var("TREASURE_LOG")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ports::outbound::{LogLevel, LogRecord};

    #[test]
    fn test_wire_screen_rejects_unknown_provider() {
        let config = Config {
            provider: Some("bing".to_string()),
            ..Config::default()
        };
        let err = wire_screen(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_wire_screen_with_log_file_writes_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diag.jsonl");
        let config = Config {
            non_interactive: true,
            log_file: Some(path.clone()),
            ..Config::default()
        };
        let app = wire_screen(&config).unwrap();
        app.log
            .log(&LogRecord::new(LogLevel::Info, "screen started").component("cli"))
            .unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"message\":\"screen started\""));
    }
}
