// src/models.rs

use crate::constants::{
    DEFAULT_DESKTOP_CONFIG, DEFAULT_RUN_FLAG, DEFAULT_SUBMODULE_PATH, DEFAULT_TARGET_SCRIPT,
    DEFAULT_TERMINAL_CANDIDATES,
};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

// --- CONFIGURATION MODELS (launcher.toml) ---

/// The launcher's settings after all configuration layers have been applied.
///
/// Every field has a built-in default, so an absent `launcher.toml` and an
/// empty one behave the same.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Submodule path relative to the launcher directory.
    pub submodule: String,
    /// Script path relative to the repository root.
    pub target_script: PathBuf,
    /// Terminal emulators tried in order.
    pub terminals: Vec<String>,
    /// Flag passed to the terminal before the script path.
    pub run_flag: String,
    /// Path template of the desktop configuration file (`~` and `$VAR` are expanded).
    pub desktop_config: String,
    /// When set, the desktop preference must resolve on the search path to be used.
    pub verify_desktop_terminal: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            submodule: DEFAULT_SUBMODULE_PATH.to_string(),
            target_script: PathBuf::from(DEFAULT_TARGET_SCRIPT),
            terminals: DEFAULT_TERMINAL_CANDIDATES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            run_flag: DEFAULT_RUN_FLAG.to_string(),
            desktop_config: DEFAULT_DESKTOP_CONFIG.to_string(),
            verify_desktop_terminal: false,
        }
    }
}

// --- RUNTIME MODELS ---

/// Where a terminal choice came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalSource {
    /// The desktop environment's configured default terminal.
    Desktop,
    /// A candidate found on the search path at the given location.
    SearchPath(PathBuf),
}

/// A terminal emulator selected to host the target script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    /// The command as written, possibly with arguments (e.g. `konsole --separate`).
    pub command: String,
    pub source: TerminalSource,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// The result of a best-effort external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub success: bool,
    /// Captured standard error, trimmed.
    pub stderr: String,
}

/// What the launcher will hand control to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Run the script in the current terminal.
    Direct { script: PathBuf },
    /// Open the script in a new terminal window.
    Hosted {
        terminal: Terminal,
        run_flag: String,
        script: PathBuf,
    },
}

impl LaunchPlan {
    /// The script both variants end up running.
    pub fn script(&self) -> &Path {
        match self {
            Self::Direct { script } | Self::Hosted { script, .. } => script,
        }
    }
}
