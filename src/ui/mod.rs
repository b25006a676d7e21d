//! Screen composition. Everything here returns strings; drawing is the
//! runner's job.

pub mod game_list;
pub mod layout;
pub mod screens;

pub use game_list::{format_game_list, GameIndexMap};
pub use layout::{center_block, side_by_side, side_by_side_with};
