use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::catalog::{Catalog, CatalogError, GameCategory, Theme};
use crate::app::settings::config_dirs::default_config_file;
use crate::runner::terminal::FALLBACK_SIZE;

/// Errors raised while loading `config.toml`.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid category table: {0}")]
    InvalidCategory(#[from] CatalogError),
}

/// A `[[categories]]` entry replacing the built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategorySettings {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub games: Vec<String>,
    pub theme: Theme,
}

/// User settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Columns assumed when the terminal size cannot be queried.
    pub fallback_columns: u16,
    /// Rows assumed when the terminal size cannot be queried.
    pub fallback_rows: u16,
    /// Poll timeout of the single-key read, in milliseconds.
    pub key_poll_ms: u64,
    pub categories: Option<Vec<CategorySettings>>,
}

impl Default for Settings {
    fn default() -> Self {
        let (fallback_columns, fallback_rows) = FALLBACK_SIZE;
        Settings {
            fallback_columns,
            fallback_rows,
            key_poll_ms: 100,
            categories: None,
        }
    }
}

impl Settings {
    pub fn fallback_size(&self) -> (u16, u16) {
        (self.fallback_columns, self.fallback_rows)
    }

    pub fn key_poll(&self) -> Duration {
        Duration::from_millis(self.key_poll_ms.max(1))
    }

    /// Build the read-only catalog: configured categories when present,
    /// otherwise the built-in three.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.categories {
            None => Ok(Catalog::builtin()),
            Some(list) => Catalog::new(
                list.iter()
                    .map(|c| GameCategory {
                        key: c.key.clone(),
                        name: c.name.clone(),
                        games: c.games.clone(),
                        theme: c.theme,
                    })
                    .collect(),
            ),
        }
    }
}

/// Parse settings text; `path` is only used for error messages.
pub fn parse_settings(text: &str, path: &Path) -> Result<Settings, SettingsError> {
    let settings: Settings = toml::from_str(text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.catalog()?;
    Ok(settings)
}

/// Load settings from an explicit file. A missing file is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&text, path)?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Load settings from the default location, falling back to defaults when
/// no file exists there.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match default_config_file() {
        Some(p) if p.exists() => load_settings_from(&p),
        _ => {
            tracing::debug!("no settings file, using defaults");
            Ok(Settings::default())
        }
    }
}
