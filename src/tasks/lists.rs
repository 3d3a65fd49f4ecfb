//! Install language-ecosystem packages from per-tool list files.
use anyhow::Result;

use super::{Context, TaskResult, flatten_list, invoke};

/// Install subcommand for a recognized ecosystem tool.
///
/// The tool set is fixed and closed; anything else is skipped.
fn install_subcommand(tool: &str) -> Option<&'static str> {
    match tool {
        "pip" => Some("install --user"),
        "npm" => Some("install -g"),
        "yarn" => Some("global add"),
        _ => None,
    }
}

/// Install packages for every configured ecosystem tool.
///
/// Walks every `[PACKAGES]` key containing `_list` in file order, deriving
/// the tool name from the key's prefix before the first `_`. `pkg_list` is
/// walked like any other `_list` key and falls out at the table lookup; it
/// gets no special case. An unreadable list file skips that key only.
///
/// # Errors
///
/// Never fails; per-key problems are logged at debug level and skipped.
pub fn run(ctx: &Context) -> Result<TaskResult> {
    let Some(section) = ctx.config.section("PACKAGES") else {
        return Ok(TaskResult::Skipped("no [PACKAGES] section".to_string()));
    };

    let mut invoked = 0u32;
    for (key, value) in section.entries() {
        if !key.contains("_list") {
            continue;
        }
        let tool = key.split('_').next().unwrap_or_default();
        let Some(subcommand) = install_subcommand(tool) else {
            ctx.log.debug(&format!("{key}: no installer for `{tool}`"));
            continue;
        };
        match std::fs::read_to_string(value) {
            Ok(contents) => {
                invoke(ctx, &format!("{tool} {subcommand} {}", flatten_list(&contents)));
                invoked += 1;
            }
            Err(e) => ctx.log.debug(&format!("{key}: {e}")),
        }
    }

    if invoked == 0 {
        return Ok(TaskResult::Skipped("no usable package lists".to_string()));
    }
    Ok(TaskResult::Ok)
}
