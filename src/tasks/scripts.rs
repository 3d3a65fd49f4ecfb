//! Run user-defined setup scripts in file order.
use anyhow::Result;

use super::{Context, TaskResult, invoke};

/// Run every entry in `[SCRIPTS]` through the shell, in the section's
/// insertion order.
///
/// Scripts are not isolated from each other: a failing entry never stops
/// the ones after it, and exit statuses are not checked.
///
/// # Errors
///
/// Never fails; an absent or empty section simply iterates zero times.
pub fn run(ctx: &Context) -> Result<TaskResult> {
    let Some(section) = ctx.config.section("SCRIPTS") else {
        return Ok(TaskResult::Skipped("no [SCRIPTS] section".to_string()));
    };
    if section.entries().is_empty() {
        return Ok(TaskResult::Skipped("no scripts configured".to_string()));
    }

    for (name, command) in section.entries() {
        ctx.log.info(&format!("\x1b[32mrunning {name}\x1b[0m"));
        invoke(ctx, command);
    }
    Ok(TaskResult::Ok)
}
