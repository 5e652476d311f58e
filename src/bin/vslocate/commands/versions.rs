//! `vslocate versions` command

use anyhow::Result;

use vslocate::toolchain::{ProgramFiles, SUPPORTED_VERSIONS};

pub fn execute() -> Result<()> {
    for version in SUPPORTED_VERSIONS {
        println!(
            "{}  {:<5} {}  %{}%  ({})",
            version.year,
            version.display,
            version.toolset,
            ProgramFiles::for_version(version).env_var(),
            version.override_var()
        );
    }
    Ok(())
}
