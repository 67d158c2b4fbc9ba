//! Reading `config.toml`, and seeding it with the commented template on
//! first run.

use crate::schema::DeskdashConfig;
use crate::validation;
use deskdash_common::ConfigError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::template::default_config_toml;

/// `<config dir>/deskdash/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("deskdash").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory for deskdash".into()))
}

/// Parse a deskdash config file. Missing sections take their defaults.
///
/// Validation failures are only logged here; `load_config_from` is the
/// strict entry point.
pub fn load_from_path(path: &Path) -> Result<DeskdashConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: DeskdashConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Seed `path` with the commented template. An existing file is left
/// untouched so a user's edits survive a racing first launch.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config already present, not overwriting");
            return Ok(());
        }
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!(path = %path.display(), "created default config");
    Ok(())
}

/// Load `path`, seeding it with the template first if it does not exist.
pub fn load_or_create(path: &Path) -> Result<DeskdashConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(path)?;
            Ok(DeskdashConfig::default())
        }
        other => other,
    }
}

/// [`load_or_create`] on [`default_config_path`].
pub fn load_default() -> Result<DeskdashConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
