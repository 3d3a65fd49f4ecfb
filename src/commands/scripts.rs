//! The `scripts` command.
use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::exec::ShellExecutor;
use crate::logging::Logger;
use crate::tasks;

/// Run the configured scripts in file order.
///
/// # Errors
///
/// Returns an error if the context cannot be built. Script exit statuses
/// are not checked, so failing scripts never fail the command.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let executor = ShellExecutor;
    let ctx = super::build_context(global, log, &executor)?;
    let result = tasks::scripts::run(&ctx)?;
    super::report(log, &result);
    Ok(())
}
