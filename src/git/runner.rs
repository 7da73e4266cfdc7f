//! Command runner abstraction
//!
//! Everything that talks to `git` goes through [`CommandRunner`], so the
//! orchestration can be driven by a scripted stand-in in tests.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Failure of a single external command.
#[derive(Debug, Error)]
pub enum RunError {
    /// The program could not be launched at all (missing binary, permissions).
    #[error("failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error("`{command}` exited with {}: {output}", exit_label(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "signal".to_string(),
    }
}

impl RunError {
    /// Combined output of the failed command, empty for launch failures.
    pub fn output(&self) -> &str {
        match self {
            RunError::Spawn { .. } => "",
            RunError::Failed { output, .. } => output,
        }
    }
}

/// Capability to run an external program.
pub trait CommandRunner {
    /// Run `program` with `args` and return its trimmed combined output.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, RunError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    cwd: Option<PathBuf>,
}

impl ProcessRunner {
    /// Runner using the current working directory of the process.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner pinned to a working directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            cwd: Some(dir.as_ref().to_path_buf()),
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, RunError> {
        let command_line = render_command(program, args);
        tracing::debug!(command = %command_line, "running");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| RunError::Spawn {
            command: command_line.clone(),
            source,
        })?;

        // stdout first, then stderr
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_string();

        if !output.status.success() {
            tracing::debug!(command = %command_line, code = ?output.status.code(), "command failed");
            return Err(RunError::Failed {
                command: command_line,
                code: output.status.code(),
                output: combined,
            });
        }

        Ok(combined)
    }
}

/// Render a program and its arguments as a single display line.
pub fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

/// Run a git command through `runner`.
pub fn run_git(runner: &dyn CommandRunner, args: &[&str]) -> Result<String, RunError> {
    runner.run("git", args)
}
