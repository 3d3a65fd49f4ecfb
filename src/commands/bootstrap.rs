//! The `bootstrap` command: every action in a fixed order.
use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::exec::ShellExecutor;
use crate::logging::Logger;
use crate::tasks::{self, Context};

/// Run the whole bootstrap sequence: clone the dotfiles repository, install
/// native packages, install ecosystem package lists, then run the scripts.
///
/// Each action runs through the recording wrapper, so one failure does not
/// abort the sequence; the command fails at the end if anything failed.
///
/// # Errors
///
/// Returns an error if the context cannot be built or any task recorded a
/// failure.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let executor = ShellExecutor;
    let ctx = super::build_context(global, log, &executor)?;

    run_all(&ctx);
    log.print_summary();

    let failed = log.failure_count();
    if failed > 0 {
        anyhow::bail!("{failed} task(s) failed");
    }
    Ok(())
}

/// Execute the four actions in bootstrap order, recording each outcome.
pub fn run_all(ctx: &Context) {
    tasks::execute("Clone dotfiles", ctx, tasks::clone::run);
    tasks::execute("Install packages", ctx, tasks::packages::run);
    tasks::execute("Install package lists", ctx, tasks::lists::run);
    tasks::execute("Run scripts", ctx, tasks::scripts::run);
}
