use clap::Parser;
use std::path::PathBuf;

pub mod handlers;

/// launcher: refreshes the `tools` submodule and opens its start script.
///
/// Run with no arguments. From an interactive terminal the script runs in
/// place; otherwise (a desktop shortcut, a file manager) it is opened in a new
/// terminal emulator window.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about,
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Operate from this directory instead of the executable's own directory.
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Read settings from this file instead of looking for `launcher.toml`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not refresh the submodule before launching.
    #[arg(long)]
    pub skip_update: bool,

    /// Print what would be launched and exit without starting anything.
    #[arg(long)]
    pub dry_run: bool,
}
