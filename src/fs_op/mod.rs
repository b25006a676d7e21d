//! Host lookups: which games are installed and where their executables live.

pub mod available;
pub mod path;

pub use available::available;
pub use path::{PathResolver, Resolver};
