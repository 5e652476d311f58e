//! `vslocate install-dir` command

use anyhow::Result;

use vslocate::toolchain::locate;
use vslocate::util::SystemHost;

pub fn execute() -> Result<()> {
    let (_, install_dir) = locate(&SystemHost)?;
    println!("{}", install_dir.display());
    Ok(())
}
