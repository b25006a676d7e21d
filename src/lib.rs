pub mod app;
pub mod cli;
pub mod errors;
pub mod fs_op;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::{Catalog, CategoryId, GameCategory, Hub, HubEvent, LaunchOutcome, NavigationState};
pub use crate::errors::HubError;
pub use crate::fs_op::{available, PathResolver, Resolver};
