//! Clone the user's dotfiles repository.
use anyhow::Result;
use std::path::PathBuf;

use super::{Context, TaskResult, invoke};

/// Materialize the dotfiles repository on disk.
///
/// Prefers an explicit `dotfiles_repo` in `[GENERAL]`, cloned into
/// `dotfiles_dest` when set and into `<home>/dotfiles` otherwise. Without a
/// repo URL, a raw `clone_dotfiles_cmd` is invoked verbatim as an escape
/// hatch. With neither configured the action reports the problem and spawns
/// nothing.
///
/// # Errors
///
/// Never fails; the spawned process's exit status is not inspected.
pub fn run(ctx: &Context) -> Result<TaskResult> {
    if let Some(repo) = ctx.config.get("GENERAL", "dotfiles_repo") {
        let dest = ctx
            .config
            .get("GENERAL", "dotfiles_dest")
            .map_or_else(|| ctx.home.join("dotfiles"), PathBuf::from);
        invoke(ctx, &format!("git clone {repo} {}", dest.display()));
        return Ok(TaskResult::Ok);
    }

    if let Some(cmd) = ctx.config.get("GENERAL", "clone_dotfiles_cmd") {
        invoke(ctx, cmd);
        return Ok(TaskResult::Ok);
    }

    ctx.log.error(
        "No dotfile repo was specified. Set dotfiles_repo or clone_dotfiles_cmd in [GENERAL].",
    );
    Ok(TaskResult::Skipped("no dotfile repo configured".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Logger;
    use crate::tasks::test_helpers::{RecordingExecutor, make_context};

    #[test]
    fn clones_repo_into_explicit_dest() {
        let executor = RecordingExecutor::default();
        let log = Logger::new("test");
        let ctx = make_context(
            "[GENERAL]\ndotfiles_repo = https://example.com/df.git\ndotfiles_dest = /opt/dotfiles\n",
            &executor,
            &log,
        );
        run(&ctx).unwrap();
        assert_eq!(
            executor.commands(),
            ["git clone https://example.com/df.git /opt/dotfiles"]
        );
    }

    #[test]
    fn default_dest_is_home_dotfiles() {
        let executor = RecordingExecutor::default();
        let log = Logger::new("test");
        let ctx = make_context(
            "[GENERAL]\ndotfiles_repo = https://example.com/df.git\n",
            &executor,
            &log,
        );
        run(&ctx).unwrap();
        assert_eq!(
            executor.commands(),
            ["git clone https://example.com/df.git /home/test/dotfiles"]
        );
    }

    #[test]
    fn falls_back_to_raw_clone_command() {
        let executor = RecordingExecutor::default();
        let log = Logger::new("test");
        let ctx = make_context(
            "[GENERAL]\nclone_dotfiles_cmd = hg clone https://example.com/df ~/df\n",
            &executor,
            &log,
        );
        run(&ctx).unwrap();
        assert_eq!(
            executor.commands(),
            ["hg clone https://example.com/df ~/df"]
        );
    }

    #[test]
    fn repo_takes_precedence_over_raw_command() {
        let executor = RecordingExecutor::default();
        let log = Logger::new("test");
        let ctx = make_context(
            "[GENERAL]\ndotfiles_repo = r\nclone_dotfiles_cmd = never run\n",
            &executor,
            &log,
        );
        run(&ctx).unwrap();
        assert_eq!(executor.commands(), ["git clone r /home/test/dotfiles"]);
    }

    #[test]
    fn nothing_configured_spawns_nothing_and_notices_once() {
        let executor = RecordingExecutor::default();
        let log = Logger::new("test");
        let ctx = make_context("[GENERAL]\nunrelated = x\n", &executor, &log);
        let result = run(&ctx).unwrap();
        assert!(executor.commands().is_empty(), "no process should spawn");
        assert_eq!(log.error_count(), 1, "exactly one error notice expected");
        assert!(matches!(result, TaskResult::Skipped(_)));
    }

    #[test]
    fn missing_general_section_behaves_like_missing_keys() {
        let executor = RecordingExecutor::default();
        let log = Logger::new("test");
        let ctx = make_context("", &executor, &log);
        run(&ctx).unwrap();
        assert!(executor.commands().is_empty());
        assert_eq!(log.error_count(), 1);
    }

    #[test]
    fn dry_run_reports_without_spawning() {
        let executor = RecordingExecutor::default();
        let log = Logger::new("test");
        let mut ctx = make_context("[GENERAL]\ndotfiles_repo = r\n", &executor, &log);
        ctx.dry_run = true;
        run(&ctx).unwrap();
        assert!(executor.commands().is_empty());
    }
}
