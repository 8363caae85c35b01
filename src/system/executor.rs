// src/system/executor.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("No command specified to run.")]
    EmptyCommand,
    #[error("Command could not be parsed: {0}")]
    CommandParse(String),
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    #[error("Command '{command}' produced output that was not valid UTF-8")]
    InvalidUtf8Output {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// A program invocation, kept as data so it can be logged, printed and faked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<OsString>, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: dunce::simplified(cwd).to_path_buf(),
        }
    }

    /// Builds an invocation from a shell-like command line plus extra arguments.
    ///
    /// The command line is split with `shlex`, so a configured terminal such as
    /// `konsole --separate` keeps its own arguments ahead of `extra`.
    pub fn from_command_line<I, S>(
        command_line: &str,
        extra: I,
        cwd: &Path,
    ) -> Result<Self, ExecutionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let trimmed = command_line.trim();
        if trimmed.is_empty() {
            return Err(ExecutionError::EmptyCommand);
        }
        let parts =
            shlex::split(trimmed).ok_or_else(|| ExecutionError::CommandParse(trimmed.to_string()))?;
        let mut parts = parts.into_iter();
        let program = parts.next().ok_or(ExecutionError::EmptyCommand)?;

        let mut args: Vec<OsString> = parts.map(OsString::from).collect();
        args.extend(extra.into_iter().map(Into::into));
        Ok(Self {
            program: program.into(),
            args,
            cwd: dunce::simplified(cwd).to_path_buf(),
        })
    }

    /// A printable rendering, used for logs and dry runs.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(&self.cwd);
        command
    }
}

/// Output of a finished command whose streams were captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// The seam between the launch sequence and real child processes.
pub trait CommandRunner {
    /// Runs the invocation to completion with stdin closed and both streams captured.
    /// A non-zero exit is reported through `success`, not as an error.
    fn run_captured(&self, invocation: &Invocation) -> Result<CapturedOutput, ExecutionError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_captured(&self, invocation: &Invocation) -> Result<CapturedOutput, ExecutionError> {
        let command_line = invocation.display();
        log::debug!(
            "Running '{}' in {}",
            command_line,
            invocation.cwd.display()
        );

        let output = invocation
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            ExecutionError::InvalidUtf8Output {
                command: command_line.clone(),
                source: e,
            }
        })?;
        // Diagnostics are only ever shown to the user, so lossy is fine here.
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        log::debug!("'{}' exited with {:?}", command_line, output.status.code());
        Ok(CapturedOutput {
            success: output.status.success(),
            stdout,
            stderr,
        })
    }
}

/// Transfers control to the invocation, with stdio inherited.
///
/// On Unix the current process image is replaced, so this only returns on
/// failure. Elsewhere the child is awaited and its exit code returned for the
/// caller to propagate.
pub fn hand_off(invocation: &Invocation) -> Result<i32, ExecutionError> {
    let command_line = invocation.display();
    log::info!("Handing off to '{}'", command_line);
    let mut command = invocation.to_command();

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        return Err(ExecutionError::CommandFailed(command_line, err));
    }

    #[cfg(not(unix))]
    {
        let status = command
            .status()
            .map_err(|e| ExecutionError::CommandFailed(command_line, e))?;
        return Ok(status.code().unwrap_or(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_line_keeps_terminal_args_before_extra() {
        let inv = Invocation::from_command_line(
            "konsole --separate",
            ["-e", "/repo/tools/start.sh"],
            Path::new("/repo"),
        )
        .expect("valid command line");

        assert_eq!(inv.program, OsString::from("konsole"));
        assert_eq!(
            inv.args,
            vec![
                OsString::from("--separate"),
                OsString::from("-e"),
                OsString::from("/repo/tools/start.sh"),
            ]
        );
        assert_eq!(inv.display(), "konsole --separate -e /repo/tools/start.sh");
    }

    #[test]
    fn test_from_command_line_honours_quotes() {
        let inv = Invocation::from_command_line(
            "'/opt/My Term/term'",
            Vec::<String>::new(),
            Path::new("/"),
        )
        .expect("valid command line");

        assert_eq!(inv.program, OsString::from("/opt/My Term/term"));
        assert!(inv.args.is_empty());
    }

    #[test]
    fn test_from_command_line_rejects_empty_and_unbalanced_input() {
        assert!(matches!(
            Invocation::from_command_line("   ", Vec::<String>::new(), Path::new("/")),
            Err(ExecutionError::EmptyCommand)
        ));
        assert!(matches!(
            Invocation::from_command_line("xterm 'oops", Vec::<String>::new(), Path::new("/")),
            Err(ExecutionError::CommandParse(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_failure_without_erroring() {
        let inv = Invocation::new("sh", ["-c", "echo out; echo boom >&2; exit 3"], Path::new("/"));

        let output = SystemRunner.run_captured(&inv).expect("sh is available");

        assert!(!output.success);
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "boom");
    }

    #[test]
    fn test_system_runner_errors_when_program_is_missing() {
        let inv = Invocation::new(
            "definitely-not-a-real-program-4f1c",
            Vec::<String>::new(),
            Path::new("."),
        );

        assert!(matches!(
            SystemRunner.run_captured(&inv),
            Err(ExecutionError::CommandFailed(_, _))
        ));
    }
}
