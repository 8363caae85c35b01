//! # Config Loader
//!
//! Finds and parses `launcher.toml`. The first file found wins; there is no
//! merging between layers. Lookup order:
//!
//! 1. An explicit path (`--config`). A missing explicit file is an error.
//! 2. `launcher.toml` next to the launcher.
//! 3. The user-level file under the system config directory.
//! 4. Built-in defaults.
use crate::{constants::CONFIG_FILENAME, core::paths, models::LauncherConfig};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("'{path}' is invalid: {reason}")]
    Invalid { path: String, reason: String },
}

/// A loaded configuration and the file it came from, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: LauncherConfig,
    pub origin: Option<PathBuf>,
}

/// Resolves the launcher configuration for a launcher directory.
pub fn load(explicit: Option<&Path>, script_dir: &Path) -> Result<LoadedConfig, ConfigError> {
    load_with_user_path(explicit, script_dir, paths::user_config_path().as_deref())
}

fn load_with_user_path(
    explicit: Option<&Path>,
    script_dir: &Path,
    user_path: Option<&Path>,
) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_file(path).map(|config| LoadedConfig {
            config,
            origin: Some(path.to_path_buf()),
        });
    }

    let local = script_dir.join(CONFIG_FILENAME);
    for candidate in std::iter::once(local.as_path()).chain(user_path) {
        if candidate.is_file() {
            log::debug!("Loading config from {}", candidate.display());
            let config = load_file(candidate)?;
            return Ok(LoadedConfig {
                config,
                origin: Some(candidate.to_path_buf()),
            });
        }
    }

    log::debug!("No {} found; using defaults", CONFIG_FILENAME);
    Ok(LoadedConfig {
        config: LauncherConfig::default(),
        origin: None,
    })
}

fn load_file(path: &Path) -> Result<LauncherConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    validate(&config).map_err(|reason| ConfigError::Invalid {
        path: path.display().to_string(),
        reason,
    })?;
    Ok(config)
}

/// Parses config text. Omitted fields keep their defaults.
pub fn parse(content: &str) -> Result<LauncherConfig, toml::de::Error> {
    toml::from_str(content)
}

fn validate(config: &LauncherConfig) -> Result<(), String> {
    if config.submodule.trim().is_empty() {
        return Err("'submodule' must not be empty".to_string());
    }
    if config.target_script.as_os_str().is_empty() {
        return Err("'target_script' must not be empty".to_string());
    }
    if config.target_script.is_absolute() {
        return Err("'target_script' must be relative to the repository root".to_string());
    }
    if config.terminals.is_empty() {
        return Err("'terminals' must list at least one terminal".to_string());
    }
    // Entries may carry arguments; the first word is what gets looked up.
    if let Some(bad) = config
        .terminals
        .iter()
        .find(|t| shlex::split(t).is_none_or(|parts| parts.is_empty()))
    {
        return Err(format!("'terminals' entry '{}' has no program to run", bad));
    }
    if config.run_flag.trim().is_empty() {
        return Err("'run_flag' must not be empty".to_string());
    }
    Ok(())
}
