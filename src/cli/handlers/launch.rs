// src/cli/handlers/launch.rs

use anyhow::Result;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{
    cli::Cli,
    core::{
        config_loader::{self, ConfigError},
        paths::{self, PathError},
        terminal::{self, DiscoveryOptions},
    },
    models::{LaunchPlan, LauncherConfig, Terminal, UpdateOutcome},
    system::{
        executor::{self, CommandRunner, ExecutionError, Invocation, SystemRunner},
        git::{Git, GitError},
        lookup::{ExecutableLookup, PathSearch},
    },
};

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Could not resolve the launcher directory: {0}")]
    ScriptDir(#[from] PathError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not determine the repository root: {0}")]
    RepositoryRoot(#[from] GitError),
    /// Carries an already localised message.
    #[error("{0}")]
    NoTerminal(String),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error("Could not write to the terminal: {0}")]
    Io(#[from] io::Error),
}

/// Everything the launch sequence needs that was resolved up front.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    /// The launcher's directory. Every child process runs here.
    pub script_dir: PathBuf,
    pub config: LauncherConfig,
    /// The expanded desktop config path, or `None` if it could not be expanded.
    pub desktop_config: Option<PathBuf>,
    /// Whether to refresh the submodule first.
    pub update_submodule: bool,
}

impl LaunchContext {
    /// Resolves the launcher directory and configuration for a CLI invocation.
    pub fn resolve(cli: &Cli) -> Result<Self, LaunchError> {
        let script_dir = paths::resolve_script_dir(cli.dir.as_deref())?;
        let loaded = config_loader::load(cli.config.as_deref(), &script_dir)?;
        match &loaded.origin {
            Some(origin) => log::info!("Using config {}", origin.display()),
            None => log::info!("Using built-in defaults"),
        }

        let desktop_config = match paths::expand_path_template(&loaded.config.desktop_config) {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("{}; the desktop terminal preference is ignored.", e);
                None
            }
        };

        Ok(Self {
            script_dir,
            config: loaded.config,
            desktop_config,
            // A dry run must leave the checkout untouched.
            update_submodule: !cli.skip_update && !cli.dry_run,
        })
    }
}

/// Main entry point for a launch. Returns the exit code to leave with.
pub fn handle(cli: &Cli) -> Result<i32> {
    let ctx = LaunchContext::resolve(cli)?;
    let interactive = io::stdin().is_terminal();
    log::debug!("stdin is a terminal: {}", interactive);

    let next = run(
        &ctx,
        &SystemRunner,
        &PathSearch::from_env(),
        interactive,
        cli.dry_run,
        &mut io::stderr(),
        &mut io::stdout(),
    )?;
    match next {
        Some(invocation) => Ok(executor::hand_off(&invocation)?),
        None => Ok(0),
    }
}

/// Resolves the plan and reports it on `out`.
///
/// Returns the process to hand off to, or `None` for a dry run, in which case
/// the plan has been printed and nothing else should happen.
pub fn run<R: CommandRunner>(
    ctx: &LaunchContext,
    runner: &R,
    lookup: &dyn ExecutableLookup,
    interactive: bool,
    dry_run: bool,
    console: &mut dyn Write,
    out: &mut dyn Write,
) -> Result<Option<Invocation>, LaunchError> {
    let plan = prepare(ctx, runner, lookup, interactive, console)?;
    let invocation = to_invocation(&plan, &ctx.script_dir)?;
    log::debug!("Resolved invocation: {}", invocation.display());

    if dry_run {
        print_plan(&plan, out)?;
        return Ok(None);
    }

    let announcement = match &plan {
        LaunchPlan::Direct { .. } => {
            format!(t!("launch.info.direct"), script = plan.script().display())
        }
        LaunchPlan::Hosted { terminal, .. } => format!(
            t!("launch.info.hosted"),
            script = plan.script().display(),
            terminal = terminal
        ),
    };
    writeln!(out, "{}", announcement.dimmed())?;
    Ok(Some(invocation))
}

/// Runs everything up to the hand-off: submodule refresh, repository root and
/// the choice between running in place and opening a terminal.
///
/// User-facing diagnostics are written to `console`.
pub fn prepare<R: CommandRunner>(
    ctx: &LaunchContext,
    runner: &R,
    lookup: &dyn ExecutableLookup,
    interactive: bool,
    console: &mut dyn Write,
) -> Result<LaunchPlan, LaunchError> {
    let git = Git::new(runner, &ctx.script_dir);

    if ctx.update_submodule {
        writeln!(
            console,
            "{}",
            format!(t!("update.info.updating"), path = ctx.config.submodule).dimmed()
        )?;
        let outcome = git.update_submodule(&ctx.config.submodule);
        report_update(&outcome, &ctx.config.submodule, console)?;
    } else {
        log::info!("{}", t!("update.info.skipped"));
    }

    let root = git.toplevel()?;
    let script = root.join(&ctx.config.target_script);
    log::debug!("Target script: {}", script.display());

    let options = DiscoveryOptions::from_config(&ctx.config, ctx.desktop_config.as_deref());
    choose_plan(interactive, script, &ctx.config, || {
        terminal::discover(&options, lookup)
    })
}

/// Prints the diagnostic for a failed refresh. A failure never stops the launch.
fn report_update(
    outcome: &UpdateOutcome,
    submodule: &str,
    console: &mut dyn Write,
) -> Result<(), io::Error> {
    if outcome.success {
        log::debug!("Submodule '{}' is up to date", submodule);
        return Ok(());
    }

    log::warn!("Submodule update failed: {}", outcome.stderr);
    writeln!(
        console,
        "{}: {}",
        "Warning".yellow().bold(),
        format!(t!("update.warn.failed"), path = submodule)
    )?;
    for line in outcome.stderr.lines() {
        writeln!(console, "  {}", line)?;
    }
    Ok(())
}

/// Picks the plan. `discover` is only called when stdin is not a terminal.
pub fn choose_plan<F>(
    interactive: bool,
    script: PathBuf,
    config: &LauncherConfig,
    discover: F,
) -> Result<LaunchPlan, LaunchError>
where
    F: FnOnce() -> Option<Terminal>,
{
    if interactive {
        return Ok(LaunchPlan::Direct { script });
    }

    let terminal = discover().ok_or_else(|| {
        LaunchError::NoTerminal(format!(
            t!("launch.error.no_terminal"),
            candidates = config.terminals.join(", ")
        ))
    })?;

    Ok(LaunchPlan::Hosted {
        terminal,
        run_flag: config.run_flag.clone(),
        script,
    })
}

/// Turns a plan into the process to hand off to.
pub fn to_invocation(plan: &LaunchPlan, cwd: &Path) -> Result<Invocation, ExecutionError> {
    match plan {
        LaunchPlan::Direct { script } => {
            Ok(Invocation::new(script.as_os_str(), Vec::<String>::new(), cwd))
        }
        LaunchPlan::Hosted {
            terminal,
            run_flag,
            script,
        } => Invocation::from_command_line(
            &terminal.command,
            [run_flag.as_str().into(), script.as_os_str().to_os_string()],
            cwd,
        ),
    }
}

fn print_plan(plan: &LaunchPlan, out: &mut dyn Write) -> Result<(), io::Error> {
    writeln!(out, "{}", t!("plan.header").yellow().bold())?;
    match plan {
        LaunchPlan::Direct { script } => {
            writeln!(out, t!("plan.direct"), script = script.display())
        }
        LaunchPlan::Hosted {
            terminal,
            run_flag,
            script,
        } => writeln!(
            out,
            t!("plan.hosted"),
            terminal = terminal,
            flag = run_flag,
            script = script.display()
        ),
    }
}
