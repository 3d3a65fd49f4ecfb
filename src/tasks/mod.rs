//! The configuration-driven actions and their shared context.
//!
//! Each action is an independent entry point over the same immutable
//! [`Context`]; actions never call each other and share no other state.
//! Every external invocation is synchronous: the calling thread blocks
//! until the spawned process exits, which is what guarantees the script
//! runner's file-order execution.

pub mod clone;
pub mod lists;
pub mod packages;
pub mod scripts;

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::exec::Executor;
use crate::logging::{Logger, TaskStatus};

/// Result of a single task execution.
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Task completed successfully.
    Ok,
    /// Task had nothing to do, with a reason.
    Skipped(String),
}

/// Shared, read-only state passed to every task.
///
/// Built once per command invocation from the parsed configuration; there
/// is no ambient global state.
pub struct Context<'a> {
    /// The parsed configuration, immutable for the rest of the process.
    pub config: Config,
    /// The user's home directory.
    pub home: PathBuf,
    /// When set, tasks print the command lines they would run instead of
    /// spawning them.
    pub dry_run: bool,
    /// Logger shared across the whole command.
    pub log: &'a Logger,
    /// Process-spawning boundary.
    pub executor: &'a dyn Executor,
}

/// Run a shell command line through the context's executor, honoring
/// dry-run mode.
///
/// The exit status of the spawned process is not inspected; the invoked
/// tools report their own failures to the user. Only a failure to spawn
/// the shell itself is surfaced, as a warning.
pub(crate) fn invoke(ctx: &Context, command: &str) {
    if ctx.dry_run {
        ctx.log.dry_run(command);
        return;
    }
    ctx.log.debug(&format!("$ {command}"));
    if let Err(e) = ctx.executor.shell(command) {
        ctx.log.warn(&format!("{e:#}"));
    }
}

/// Flatten a package list file's contents into one space-separated
/// argument string.
///
/// Newlines are replaced one-for-one, so a file with a trailing newline
/// yields a trailing space; tokens stay exactly as written in the file.
pub(crate) fn flatten_list(contents: &str) -> String {
    contents.replace('\n', " ")
}

/// Execute a task function, recording the outcome in the logger.
///
/// Errors are absorbed here so that one failing task does not abort a
/// multi-task command; callers check [`Logger::failure_count`] at the end.
pub fn execute(name: &str, ctx: &Context, task: fn(&Context) -> Result<TaskResult>) {
    ctx.log.stage(name);
    match task(ctx) {
        Ok(TaskResult::Ok) if ctx.dry_run => {
            ctx.log.record_task(name, TaskStatus::DryRun, None);
        }
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(name, TaskStatus::Ok, None);
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.debug(&format!("skipped: {reason}"));
            ctx.log.record_task(name, TaskStatus::Skipped, Some(&reason));
        }
        Err(e) => {
            ctx.log.error(&format!("{name}: {e:#}"));
            ctx.log
                .record_task(name, TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}
