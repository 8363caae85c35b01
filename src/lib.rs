//! Bootstrap launcher: refreshes the `tools` submodule, then runs its start
//! script in the current terminal or in a newly opened terminal window.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
