// src/core/desktop_config.rs

//! Reads the desktop environment's preferred terminal from its key-value config
//! file (KDE's `kdeglobals`). Only one key is ever looked at; sections and
//! everything else in the file are ignored.

use crate::constants::DESKTOP_TERMINAL_KEY;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

lazy_static! {
    static ref TERMINAL_KEY_LINE: Regex = Regex::new(&format!(
        r"(?m)^[ \t]*{}[ \t]*=(.*)$",
        regex::escape(DESKTOP_TERMINAL_KEY)
    ))
    .expect("terminal key pattern is valid");
}

/// Extracts the terminal preference from config text.
///
/// The first matching line wins. A present but blank value counts as absent.
pub fn parse_terminal_preference(content: &str) -> Option<String> {
    let captures = TERMINAL_KEY_LINE.captures(content)?;
    let value = captures.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Reads the terminal preference from the file at `path`.
///
/// A missing or unreadable file is treated the same as a missing key.
pub fn read_terminal_preference(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let preference = parse_terminal_preference(&content);
            log::debug!(
                "Desktop terminal preference in {}: {:?}",
                path.display(),
                preference
            );
            preference
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No desktop config at {}", path.display());
            None
        }
        Err(e) => {
            log::warn!("Could not read desktop config {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_finds_key_inside_a_section() {
        let content = "[General]\nColorScheme=Breeze\nTerminalApplication=konsole\nTerminalService=org.kde.konsole.desktop\n";

        assert_eq!(parse_terminal_preference(content), Some("konsole".to_string()));
    }

    #[test]
    fn test_parse_trims_value_and_keeps_arguments() {
        let content = "  TerminalApplication =  alacritty --class Launcher  \r\n";

        assert_eq!(
            parse_terminal_preference(content),
            Some("alacritty --class Launcher".to_string())
        );
    }

    #[test]
    fn test_parse_first_match_wins() {
        let content = "TerminalApplication=kitty\n[Other]\nTerminalApplication=xterm\n";

        assert_eq!(parse_terminal_preference(content), Some("kitty".to_string()));
    }

    #[test]
    fn test_parse_empty_or_missing_value_is_absent() {
        assert_eq!(parse_terminal_preference("TerminalApplication=\n"), None);
        assert_eq!(parse_terminal_preference("TerminalApplication=   \n"), None);
        assert_eq!(parse_terminal_preference("[General]\nFont=Noto\n"), None);
    }

    #[test]
    fn test_parse_ignores_similar_keys() {
        let content = "TerminalService=org.kde.konsole.desktop\nMyTerminalApplication=foot\n";

        assert_eq!(parse_terminal_preference(content), None);
    }

    #[test]
    fn test_read_missing_file_is_absent() {
        let dir = TempDir::new().expect("tempdir");

        assert_eq!(read_terminal_preference(&dir.path().join("kdeglobals")), None);
    }

    #[test]
    fn test_read_file_from_disk() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("kdeglobals");
        std::fs::write(&path, "[General]\nTerminalApplication=foot\n").expect("write");

        assert_eq!(read_terminal_preference(&path), Some("foot".to_string()));
    }
}
