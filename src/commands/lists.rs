//! The `lists` command.
use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::exec::ShellExecutor;
use crate::logging::Logger;
use crate::tasks;

/// Install pip/npm/yarn packages from their configured list files.
///
/// # Errors
///
/// Returns an error if the context cannot be built. Unreadable list files
/// and unrecognized tools are skipped per key, never propagated.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let executor = ShellExecutor;
    let ctx = super::build_context(global, log, &executor)?;
    let result = tasks::lists::run(&ctx)?;
    super::report(log, &result);
    Ok(())
}
