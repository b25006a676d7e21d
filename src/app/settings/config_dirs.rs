use directories_next::ProjectDirs;
use std::path::PathBuf;

/// Name used for the per-user config and cache directories.
pub const APP_NAME: &str = "gamehub";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Directory holding `config.toml`, e.g. `~/.config/gamehub` on Linux.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Directory used for the log file, e.g. `~/.cache/gamehub` on Linux.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Default settings file location.
pub fn default_config_file() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("config.toml"))
}

/// Default log file location.
pub fn default_log_file() -> Option<PathBuf> {
    user_cache_dir().map(|d| d.join(format!("{APP_NAME}.log")))
}
