pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_config_file, default_log_file, project_config_dir, user_cache_dir};
pub use read_settings::{load_settings, load_settings_from, parse_settings, CategorySettings, Settings, SettingsError};
