// src/core/paths.rs

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILENAME};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("Could not resolve directory '{path}': {source}")]
    Canonicalize {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{0}' is not a directory.")]
    NotADirectory(String),
    #[error("Failed to expand path template '{template}': {reason}")]
    Expansion { template: String, reason: String },
}

/// Returns the directory the launcher operates from.
///
/// With no override this is the directory holding the running executable.
/// The result is canonical, with Windows `\\?\` prefixes stripped by `dunce`.
pub fn resolve_script_dir(dir_override: Option<&Path>) -> Result<PathBuf, PathError> {
    let dir = match dir_override {
        Some(dir) => canonicalize(dir)?,
        None => {
            let exe = env::current_exe().map_err(PathError::CurrentExe)?;
            let exe = canonicalize(&exe)?;
            exe.parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| PathError::NotADirectory(exe.display().to_string()))?
        }
    };

    if !dir.is_dir() {
        return Err(PathError::NotADirectory(dir.display().to_string()));
    }
    log::debug!("Launcher directory resolved to {}", dir.display());
    Ok(dir)
}

fn canonicalize(path: &Path) -> Result<PathBuf, PathError> {
    dunce::canonicalize(path).map_err(|source| PathError::Canonicalize {
        path: path.display().to_string(),
        source,
    })
}

/// Expands `~` and environment variables (`$VAR`, `${VAR}`) in a path template.
pub fn expand_path_template(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        template: template.to_string(),
        reason: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// The user-level config file (`~/.config/launcher/launcher.toml` on Linux).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}
