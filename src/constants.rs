// src/constants.rs

/// The submodule refreshed before every launch, relative to the launcher directory.
pub const DEFAULT_SUBMODULE_PATH: &str = "tools";

/// The script handed off to, relative to the repository root.
pub const DEFAULT_TARGET_SCRIPT: &str = "tools/start.sh";

/// Terminal emulators looked up on the search path, highest priority first.
pub const DEFAULT_TERMINAL_CANDIDATES: [&str; 7] = [
    "x-terminal-emulator",
    "gnome-terminal",
    "konsole",
    "xfce4-terminal",
    "alacritty",
    "kitty",
    "xterm",
];

/// The flag every candidate accepts for "run this command in the new window".
pub const DEFAULT_RUN_FLAG: &str = "-e";

/// Desktop configuration file holding the user's preferred terminal.
pub const DEFAULT_DESKTOP_CONFIG: &str = "~/.config/kdeglobals";

/// The key inside the desktop configuration file.
pub const DESKTOP_TERMINAL_KEY: &str = "TerminalApplication";

/// The name of the launcher's own configuration file.
pub const CONFIG_FILENAME: &str = "launcher.toml";

/// The directory under the system config dir holding the user-level config.
pub const CONFIG_DIR_NAME: &str = "launcher";
