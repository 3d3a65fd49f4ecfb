use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point for the tuckr bootstrap tool.
#[derive(Parser, Debug)]
#[command(
    name = "tuckr",
    about = "Declarative dotfile and environment bootstrap",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Use a specific config file instead of searching the default locations
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Preview the commands that would run without spawning them
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clone the dotfiles repo, install everything, then run scripts
    Bootstrap,
    /// Clone the configured dotfiles repository
    Clone,
    /// Install native packages from the configured list
    Packages,
    /// Install pip/npm/yarn packages from their list files
    Lists,
    /// Run the configured scripts in file order
    Scripts,
    /// Check that the configuration and required tools are usable
    Doctor,
    /// Print version information
    Version,
}

impl Command {
    /// Short name used for the per-command log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bootstrap => "bootstrap",
            Self::Clone => "clone",
            Self::Packages => "packages",
            Self::Lists => "lists",
            Self::Scripts => "scripts",
            Self::Doctor => "doctor",
            Self::Version => "version",
        }
    }
}
