//! treasure 固有のドメイン型（型と不変条件）

pub mod category;
pub mod command;
pub mod point;
pub mod store;

pub use category::CategoryFilter;
pub use command::ScreenCommand;
pub use point::{PointId, PointOfInterest};
pub use store::{PointOfInterestStore, StoreError};
