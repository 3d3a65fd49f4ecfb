//! The process-invocation boundary.
//!
//! Every action in this crate ultimately turns configuration into a single
//! shell command line. [`Executor`] is the seam between the actions and the
//! operating system: production code uses [`ShellExecutor`], tests substitute
//! a recording implementation so nothing is actually spawned.

use anyhow::{Context, Result};
use std::process::Command;

/// Outcome of a shell invocation.
///
/// Callers in this crate deliberately do not act on it (the invoked tools
/// report their own failures to the user), but it is captured so tests and
/// diagnostics can observe it.
#[derive(Debug, Clone, Copy)]
pub struct ExecResult {
    /// Whether the command exited with status zero.
    pub success: bool,
    /// Raw exit code, if the process exited normally.
    pub code: Option<i32>,
}

/// Abstraction over shell command execution.
pub trait Executor: Send + Sync {
    /// Run a command line through the shell, blocking until it exits.
    ///
    /// The child inherits stdout/stderr so tool output reaches the terminal
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns an error only when the shell itself cannot be spawned; a
    /// non-zero exit from the command is reported in the returned
    /// [`ExecResult`].
    fn shell(&self, command: &str) -> Result<ExecResult>;

    /// Check if a program is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// Executor that spawns real processes via `sh -c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn shell(&self, command: &str) -> Result<ExecResult> {
        let status = Command::new("sh")
            .args(["-c", command])
            .status()
            .with_context(|| format!("failed to execute: {command}"))?;
        Ok(ExecResult {
            success: status.success(),
            code: status.code(),
        })
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
