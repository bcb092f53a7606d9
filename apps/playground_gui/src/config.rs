use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Tunnel address the inference notebook was last published on.
pub const DEFAULT_BASE_URL: &str = "https://4abd-34-86-181-216.ngrok-free.app";
pub const DEFAULT_LOG_FILTER: &str = "info";
const CONFIG_FILE_NAME: &str = "playground.toml";
const CONFIG_DIR_NAME: &str = "transformer_playground";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Values given on the command line. They win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub log_filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid base url '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    base_url: Option<String>,
    log_filter: Option<String>,
}

pub fn load_settings(overrides: &Overrides) -> Result<Settings, ConfigError> {
    load_settings_with_env(overrides, |name| std::env::var(name).ok())
}

/// Resolves defaults, then the config file, then environment, then CLI overrides.
pub fn load_settings_with_env(
    overrides: &Overrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    if let Some(path) = resolve_config_path(overrides.config_path.as_deref()) {
        let file_cfg = read_config_file(&path)?;
        if let Some(v) = file_cfg.base_url {
            settings.base_url = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    let non_empty = |name: &str| env(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = non_empty("PLAYGROUND_BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = non_empty("APP__BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = non_empty("PLAYGROUND_LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = non_empty("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = &overrides.base_url {
        settings.base_url = v.clone();
    }
    if let Some(v) = &overrides.log_filter {
        settings.log_filter = v.clone();
    }

    settings.base_url = normalize_base_url(&settings.base_url)?;
    Ok(settings)
}

/// An explicit path is always used; otherwise the first default location that exists.
fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

fn read_config_file(path: &Path) -> Result<FileSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme '{}', expected http or https",
            parsed.scheme()
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_string()));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
