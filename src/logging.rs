//! File logging. The terminal belongs to the menu and the games, so log
//! records go to a file and never to stdout or stderr.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::app::settings::default_log_file;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "GAMEHUB_LOG";

/// Keeps the background log writer alive; drop it last.
pub struct LogGuard(Option<WorkerGuard>);

impl LogGuard {
    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }
}

fn split_log_path(path: &Path) -> Option<(PathBuf, String)> {
    let name = path.file_name()?.to_str()?.to_string();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((dir, name))
}

/// Start logging to `path`, or to the default cache location when `None`.
///
/// Any failure (no cache dir, unwritable file, subscriber already set)
/// leaves logging disabled; the hub runs the same either way.
pub fn init_logging(path: Option<&Path>) -> LogGuard {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_log_file) else {
        return LogGuard(None);
    };
    let Some((dir, name)) = split_log_path(&path) else {
        return LogGuard(None);
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return LogGuard(None);
    }
    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(&dir)
    {
        Ok(a) => a,
        Err(_) => return LogGuard(None),
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    match installed {
        Ok(()) => LogGuard(Some(guard)),
        Err(_) => LogGuard(None),
    }
}
