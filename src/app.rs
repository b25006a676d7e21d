pub mod art;
pub mod catalog;
pub mod core;
pub mod settings;
pub mod types;

pub use catalog::{Catalog, CategoryId, GameCategory, Theme};
pub use core::Hub;
pub use types::{HubEvent, LaunchOutcome, NavigationState, View, WaitKind};
