//! vslocate CLI - Locate the installed Visual Studio toolchain

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vslocate::DiscoveryError;

mod cli;
mod commands;

use cli::{Cli, Commands, DescribeArgs};

fn main() {
    if let Err(e) = run() {
        match e.downcast::<DiscoveryError>() {
            Ok(err) => eprintln!("{:?}", miette::Report::new(err)),
            Err(e) => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for the build
    let filter = if cli.verbose {
        EnvFilter::new("vslocate=debug")
    } else {
        EnvFilter::new("vslocate=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        None => commands::describe::execute(DescribeArgs::default()),
        Some(Commands::Describe(args)) => commands::describe::execute(args),
        Some(Commands::Select) => commands::select::execute(),
        Some(Commands::InstallDir) => commands::install_dir::execute(),
        Some(Commands::Versions) => commands::versions::execute(),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
    }
}
