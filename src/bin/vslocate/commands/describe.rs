//! `vslocate describe` command

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::DescribeArgs;
use vslocate::ops::{format_descriptor, OutputFormat};
use vslocate::toolchain::discover;
use vslocate::util::config::load_effective_config;
use vslocate::util::SystemHost;

pub fn execute(args: DescribeArgs) -> Result<()> {
    let format: OutputFormat = args
        .format
        .parse()
        .with_context(|| format!("invalid output format: {}", args.format))?;

    let config = load_effective_config(args.config.as_deref())?;
    let desc = discover(&SystemHost, &config)?;

    tracing::debug!(
        "Visual Studio {} at {}",
        desc.version,
        desc.install_dir.display()
    );

    // Render fully before printing so a failure leaves stdout empty.
    let output = format_descriptor(&desc, format)?;
    std::io::stdout()
        .write_all(output.as_bytes())
        .context("failed to write toolchain description")?;

    Ok(())
}
