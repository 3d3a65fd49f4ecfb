//! Declarative dotfile and environment bootstrap engine.
//!
//! Reads a single INI configuration file (`tuckr.conf`) and turns it into
//! external tool invocations: cloning a dotfiles repository, installing
//! native and language-ecosystem packages, and running user-defined setup
//! scripts in file order. The invoked tools (git, the shell, the package
//! managers) are collaborators, not reimplemented here; their exit
//! statuses are deliberately left to them to report.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — locate and parse `tuckr.conf`
//! - **[`tasks`]** — the configuration-driven actions over a shared context
//! - **[`commands`]** — top-level subcommand orchestration
//! - **[`exec`]** — the process-invocation boundary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod tasks;
