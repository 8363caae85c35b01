// src/bin/launcher.rs

use clap::Parser;
use colored::*;
use launcher::cli::{Cli, handlers};

/// Sets up logging, parses arguments, runs the launch and maps failures to
/// exit status 1. On Unix a successful launch never returns here: the process
/// is replaced by the script or the terminal hosting it.
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("CLI args parsed: {:?}", cli);

    match handlers::launch::handle(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}
