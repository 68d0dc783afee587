//! External command execution
//!
//! Commands are joined into a single line and handed to the platform shell,
//! the same way the upstream npm tooling expects to be invoked.

use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Failure of an external command
#[derive(Debug, Error)]
pub enum CommandError {
    /// The process ran and exited with a non-zero status
    #[error("Command failed with exit code {code}: {command}")]
    Exit { command: String, code: i32 },

    /// The process could not be started at all
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    /// Exit code of the process, if it got far enough to have one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CommandError::Exit { code, .. } => Some(*code),
            CommandError::Spawn { .. } => None,
        }
    }
}

/// Options for a single command invocation
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory; inherits the current one when `None`
    pub cwd: Option<PathBuf>,
}

impl CommandOptions {
    /// Run the command inside `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
        }
    }
}

/// Join a command and its arguments into one shell line (no escaping)
pub fn command_line(command: &str, args: &[&str]) -> String {
    if args.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, args.join(" "))
    }
}

/// Something that can run an external command to completion
pub trait CommandRunner {
    /// Run `command` with `args`, succeeding only on exit code zero
    fn run(
        &self,
        command: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> impl Future<Output = Result<(), CommandError>>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows) with inherited stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

#[cfg(not(windows))]
fn shell_command(line: &str) -> TokioCommand {
    let mut cmd = TokioCommand::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(windows)]
fn shell_command(line: &str) -> TokioCommand {
    let mut cmd = TokioCommand::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

impl CommandRunner for ShellRunner {
    async fn run(
        &self,
        command: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> Result<(), CommandError> {
        let line = command_line(command, args);

        let mut cmd = shell_command(&line);
        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }

        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| CommandError::Spawn {
                command: line.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Exit {
                command: line,
                // Killed by a signal
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_joins_with_spaces() {
        assert_eq!(command_line("npm", &[]), "npm");
        assert_eq!(
            command_line("npm", &["install", "--legacy-peer-deps", "zustand"]),
            "npm install --legacy-peer-deps zustand"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_succeeds() {
        let result = ShellRunner.run("true", &[], &CommandOptions::default()).await;
        assert!(result.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_code_is_carried() {
        let err = ShellRunner
            .run("exit", &["2"], &CommandOptions::default())
            .await
            .unwrap_err();

        match &err {
            CommandError::Exit { command, code } => {
                assert_eq!(*code, 2);
                assert_eq!(command, "exit 2");
            }
            other => panic!("expected exit error, got {:?}", other),
        }
        assert_eq!(err.exit_code(), Some(2));
        assert!(err.to_string().contains("exit code 2"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        ShellRunner
            .run("touch", &["marker.txt"], &CommandOptions::in_dir(dir.path()))
            .await
            .unwrap();
        assert!(dir.path().join("marker.txt").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_working_directory_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = ShellRunner
            .run("true", &[], &CommandOptions::in_dir(missing))
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
        assert_eq!(err.exit_code(), None);
    }
}
