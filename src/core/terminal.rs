// src/core/terminal.rs

use crate::{
    core::desktop_config,
    models::{LauncherConfig, Terminal, TerminalSource},
    system::lookup::ExecutableLookup,
};
use std::path::Path;

/// Inputs to terminal discovery that come from configuration.
#[derive(Debug, Clone, Copy)]
pub struct DiscoveryOptions<'a> {
    /// Desktop config file to read the user's preference from, if any.
    pub desktop_config: Option<&'a Path>,
    /// Require the desktop preference to resolve on the search path.
    pub verify_desktop_terminal: bool,
    /// Candidates tried in order when there is no usable preference.
    pub candidates: &'a [String],
}

impl<'a> DiscoveryOptions<'a> {
    pub fn from_config(config: &'a LauncherConfig, desktop_config: Option<&'a Path>) -> Self {
        Self {
            desktop_config,
            verify_desktop_terminal: config.verify_desktop_terminal,
            candidates: &config.terminals,
        }
    }
}

/// Picks the terminal emulator to host the target script.
///
/// 1. A non-empty desktop preference is returned as-is, unless
///    `verify_desktop_terminal` is set and its program does not resolve.
/// 2. Otherwise the first candidate found on the search path.
/// 3. Otherwise `None`.
pub fn discover(options: &DiscoveryOptions<'_>, lookup: &dyn ExecutableLookup) -> Option<Terminal> {
    if let Some(preferred) = options
        .desktop_config
        .and_then(desktop_config::read_terminal_preference)
    {
        if !options.verify_desktop_terminal || preference_resolves(&preferred, lookup) {
            log::info!("Using desktop terminal preference '{}'", preferred);
            return Some(Terminal {
                command: preferred,
                source: TerminalSource::Desktop,
            });
        }
        log::warn!(
            "Desktop terminal '{}' is not on the search path; trying candidates instead.",
            preferred
        );
    }

    let found = options.candidates.iter().find_map(|candidate| {
        let path = program_of(candidate).and_then(|program| lookup.find(&program));
        log::debug!("Looking up terminal '{}': {:?}", candidate, path);
        path.map(|path| Terminal {
            command: candidate.clone(),
            source: TerminalSource::SearchPath(path),
        })
    });

    if found.is_none() {
        log::debug!("None of {} candidates resolved", options.candidates.len());
    }
    found
}

fn preference_resolves(preferred: &str, lookup: &dyn ExecutableLookup) -> bool {
    program_of(preferred).is_some_and(|program| lookup.find(&program).is_some())
}

/// The program part of a terminal command such as `kitty --single-instance`.
fn program_of(command: &str) -> Option<String> {
    shlex::split(command).and_then(|parts| parts.into_iter().next())
}
