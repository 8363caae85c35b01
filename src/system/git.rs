// src/system/git.rs

use crate::{
    models::UpdateOutcome,
    system::executor::{CommandRunner, ExecutionError, Invocation},
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("git could not be run: {0}")]
    Execution(#[from] ExecutionError),
    #[error("'{dir}' is not inside a git repository: {stderr}")]
    NotARepository { dir: String, stderr: String },
    #[error("git reported an empty repository root for '{0}'")]
    EmptyToplevel(String),
}

/// Thin wrapper over the `git` binary, bound to one working directory.
#[derive(Debug)]
pub struct Git<'a, R: CommandRunner> {
    runner: &'a R,
    workdir: PathBuf,
}

impl<'a, R: CommandRunner> Git<'a, R> {
    pub fn new(runner: &'a R, workdir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            workdir: workdir.into(),
        }
    }

    /// Initialises and fast-forwards one submodule to its remote branch.
    ///
    /// Failure of git itself, including git not being installed, is folded into
    /// the outcome so the caller decides whether to continue.
    pub fn update_submodule(&self, submodule: &str) -> UpdateOutcome {
        let invocation = Invocation::new(
            "git",
            ["submodule", "update", "--init", "--remote", "--", submodule],
            &self.workdir,
        );
        match self.runner.run_captured(&invocation) {
            Ok(output) => UpdateOutcome {
                success: output.success,
                stderr: output.stderr.trim().to_string(),
            },
            Err(e) => UpdateOutcome {
                success: false,
                stderr: e.to_string(),
            },
        }
    }

    /// Returns the top-level directory of the repository containing the workdir.
    pub fn toplevel(&self) -> Result<PathBuf, GitError> {
        let invocation = Invocation::new("git", ["rev-parse", "--show-toplevel"], &self.workdir);
        let output = self.runner.run_captured(&invocation)?;
        if !output.success {
            return Err(GitError::NotARepository {
                dir: self.workdir.display().to_string(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        let root = output.stdout.trim();
        if root.is_empty() {
            return Err(GitError::EmptyToplevel(self.workdir.display().to_string()));
        }
        Ok(PathBuf::from(root))
    }
}
