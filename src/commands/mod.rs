//! Top-level subcommand orchestration.
pub mod bootstrap;
pub mod clone;
pub mod doctor;
pub mod lists;
pub mod packages;
pub mod scripts;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::exec::Executor;
use crate::logging::Logger;
use crate::tasks::{Context, TaskResult};

/// Build the shared task context: resolve the home directory and load the
/// configuration exactly once.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined, or if an
/// explicit `--config` file cannot be read or parsed. The default config
/// search never errors here; a missing config surfaces as an empty
/// configuration plus a notice (see [`Config::load`]).
pub fn build_context<'a>(
    global: &GlobalOpts,
    log: &'a Logger,
    executor: &'a dyn Executor,
) -> Result<Context<'a>> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    let config = match &global.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(&home, log),
    };
    Ok(Context {
        config,
        home,
        dry_run: global.dry_run,
        log,
        executor,
    })
}

/// Report the outcome of a directly-run task.
pub(crate) fn report(log: &Logger, result: &TaskResult) {
    if let TaskResult::Skipped(reason) = result {
        log.debug(&format!("skipped: {reason}"));
    }
}
