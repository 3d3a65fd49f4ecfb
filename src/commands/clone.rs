//! The `clone` command.
use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::exec::ShellExecutor;
use crate::logging::Logger;
use crate::tasks;

/// Clone the configured dotfiles repository.
///
/// # Errors
///
/// Returns an error if the context cannot be built. A missing repo
/// configuration is reported as a notice, not an error.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let executor = ShellExecutor;
    let ctx = super::build_context(global, log, &executor)?;
    let result = tasks::clone::run(&ctx)?;
    super::report(log, &result);
    Ok(())
}
