//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// vslocate - Locate the installed Visual Studio toolchain for GN builds
#[derive(Parser)]
#[command(name = "vslocate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the toolchain location and versions (default)
    Describe(DescribeArgs),

    /// Print the selected Visual Studio version
    Select,

    /// Print the Visual Studio install directory
    InstallDir,

    /// List supported Visual Studio versions in priority order
    Versions,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Output format (gn, json)
    #[arg(long, default_value = "gn")]
    pub format: String,

    /// Configuration file applied on top of the global and project configs
    #[arg(long, env = "VSLOCATE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Default for DescribeArgs {
    fn default() -> Self {
        DescribeArgs {
            format: "gn".to_string(),
            config: std::env::var_os("VSLOCATE_CONFIG")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
