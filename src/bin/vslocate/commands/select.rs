//! `vslocate select` command

use anyhow::Result;

use vslocate::toolchain::select_version;
use vslocate::util::SystemHost;

pub fn execute() -> Result<()> {
    let version = select_version(&SystemHost)?;
    println!("{}", version.label());
    Ok(())
}
