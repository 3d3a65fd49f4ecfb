//! The `packages` command.
use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::exec::ShellExecutor;
use crate::logging::Logger;
use crate::tasks;

/// Install native packages from the configured list.
///
/// # Errors
///
/// Returns an error if the context cannot be built, or if `pkg_list` is
/// missing or unreadable while `pkg_install_cmd` is configured.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let executor = ShellExecutor;
    let ctx = super::build_context(global, log, &executor)?;
    let result = tasks::packages::run(&ctx)?;
    super::report(log, &result);
    Ok(())
}
