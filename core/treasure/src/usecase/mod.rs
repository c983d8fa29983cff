//! ユースケース: ストア・地図・ビューの同期を司る

pub mod map_screen;
pub mod screen;

pub use map_screen::MapScreen;
pub use screen::{ObsDeps, PolicyDeps, ScreenDeps, ServiceDeps, TreasureScreen, ViewDeps};
