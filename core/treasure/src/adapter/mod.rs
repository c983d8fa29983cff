//! 標準アダプタ実装（コンソールビュー・環境変数位置・外部アプリ起動）

pub mod console_map;
pub mod console_rows;
pub mod console_share;
pub mod env_location;
pub mod name_prompt;
pub mod process_navigation;
pub mod sigint_checker;

pub use console_map::ConsoleMapCanvas;
pub use console_rows::ConsoleRowView;
pub use console_share::ConsoleShareSink;
pub use env_location::EnvLocationProvider;
pub use name_prompt::{CliNamePrompt, NoNamePrompt};
pub use process_navigation::{directions_url, ProcessNavigationLauncher};
pub use sigint_checker::{NoopInterruptChecker, SigintChecker};
