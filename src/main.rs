use anyhow::Result;
use clap::Parser;

use tuckr::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose, args.command.name());
    let log = logging::Logger::new(args.command.name());

    match args.command {
        cli::Command::Bootstrap => commands::bootstrap::run(&args.global, &log),
        cli::Command::Clone => commands::clone::run(&args.global, &log),
        cli::Command::Packages => commands::packages::run(&args.global, &log),
        cli::Command::Lists => commands::lists::run(&args.global, &log),
        cli::Command::Scripts => commands::scripts::run(&args.global, &log),
        cli::Command::Doctor => commands::doctor::run(&args.global, &log),
        cli::Command::Version => {
            let version = option_env!("TUCKR_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("tuckr {version}");
            Ok(())
        }
    }
}
