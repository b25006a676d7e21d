//! Everything that touches the real terminal or spawns processes.

pub mod event_loop_main;
pub mod interrupt;
pub mod launcher;
pub mod terminal;

pub use event_loop_main::{run_app, run_hub};
pub use launcher::{Launcher, ProcessLauncher};
pub use terminal::{Console, CrosstermConsole};
