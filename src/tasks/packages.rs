//! Install OS-level packages with a user-configured installer command.
use anyhow::{Context as _, Result, bail};
use std::path::Path;

use super::{Context, TaskResult, flatten_list, invoke};

/// Install the packages listed in `PACKAGES.pkg_list` by handing them, as a
/// single space-separated batch, to the `pkg_install_cmd` prefix.
///
/// Without `pkg_install_cmd` the action is a silent no-op.
///
/// # Errors
///
/// A missing `pkg_list` key or an unreadable list file is a hard failure,
/// deliberately unlike the ecosystem installer, which skips unreadable
/// lists per key.
pub fn run(ctx: &Context) -> Result<TaskResult> {
    let Some(cmd) = ctx.config.get("PACKAGES", "pkg_install_cmd") else {
        ctx.log.debug("pkg_install_cmd not set");
        return Ok(TaskResult::Skipped("pkg_install_cmd not set".to_string()));
    };

    let Some(list) = ctx.config.get("PACKAGES", "pkg_list") else {
        bail!("pkg_list is not set in [PACKAGES]");
    };

    let packages = read_list(Path::new(list))?;
    invoke(ctx, &format!("{cmd} {packages}"));
    Ok(TaskResult::Ok)
}

/// Read a newline-separated list file into one argument string.
fn read_list(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading package list {}", path.display()))?;
    Ok(flatten_list(&contents))
}
