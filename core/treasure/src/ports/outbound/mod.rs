//! Outbound ポート: スクリーンが外界（ビュー・位置情報・ナビゲーション等）を使うための trait

pub mod interrupt_checker;
pub mod location_provider;
pub mod map_canvas;
pub mod name_prompt;
pub mod navigation;
pub mod row_view;
pub mod share;

pub use interrupt_checker::InterruptChecker;
pub use location_provider::{LocationEvent, LocationProvider};
pub use map_canvas::{Annotation, MapCanvas};
pub use name_prompt::NamePrompt;
pub use navigation::NavigationLauncher;
pub use row_view::RowView;
pub use share::ShareSink;
