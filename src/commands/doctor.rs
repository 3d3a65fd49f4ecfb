//! The `doctor` command: validate the environment without invoking anything.
use anyhow::Result;
use std::path::Path;

use crate::cli::GlobalOpts;
use crate::exec::{Executor as _, ShellExecutor};
use crate::logging::Logger;
use crate::tasks::Context;

/// Check that the configuration and the tools it references are usable.
///
/// Verifies that `sh` is on PATH, that `git` is available when a clone is
/// configured, and that every `_list` file referenced from `[PACKAGES]`
/// exists. Ecosystem tools that are configured but missing from PATH are
/// warned about, not treated as errors, since the bootstrap itself may be
/// what installs them.
///
/// # Errors
///
/// Returns an error if the context cannot be built or any check fails.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let executor = ShellExecutor;
    let ctx = super::build_context(global, log, &executor)?;

    log.stage("Checking environment");
    let mut errors = 0u32;

    if ctx.executor.which("sh") {
        log.info("found sh");
    } else {
        log.error("missing required tool: sh");
        errors += 1;
    }

    if ctx.config.get("GENERAL", "dotfiles_repo").is_some() {
        if ctx.executor.which("git") {
            log.info("found git");
        } else {
            log.error("dotfiles_repo is set but git is not on PATH");
            errors += 1;
        }
    }

    if ctx.config.is_empty() {
        log.warn("configuration is empty; nothing else to check");
    } else {
        errors += check_lists(&ctx);
    }

    if errors > 0 {
        anyhow::bail!("{errors} problem(s) found");
    }
    log.info("all checks passed");
    Ok(())
}

/// Verify that configured list files exist and their tools are on PATH.
fn check_lists(ctx: &Context) -> u32 {
    let Some(section) = ctx.config.section("PACKAGES") else {
        return 0;
    };

    let mut errors = 0u32;
    for (key, value) in section.entries() {
        if !key.contains("_list") {
            continue;
        }
        if Path::new(value).exists() {
            ctx.log.debug(&format!("{key}: found {value}"));
        } else {
            ctx.log.error(&format!("{key}: list file {value} does not exist"));
            errors += 1;
        }
        let tool = key.split('_').next().unwrap_or_default();
        if matches!(tool, "pip" | "npm" | "yarn") && !ctx.executor.which(tool) {
            ctx.log.warn(&format!("{tool} is configured but not on PATH"));
        }
    }
    errors
}
