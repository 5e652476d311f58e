//! Test fixtures for common machine layouts.

use std::path::PathBuf;

use super::FakeHost;

/// `%ProgramFiles%` on a [`FakeHost::windows`] machine.
pub const PF: &str = "C:/Program Files";

/// `%ProgramFiles(x86)%` on a [`FakeHost::windows`] machine.
pub const PF_X86: &str = "C:/Program Files (x86)";

/// Fixture for one Visual Studio installation.
#[derive(Debug, Clone)]
pub struct InstallFixture {
    /// Program directory it lives under.
    pub base: &'static str,
    /// Product year.
    pub year: u16,
    /// Edition directory name.
    pub edition: &'static str,
    /// MSVC tools subversions, in enumeration order.
    pub tools: Vec<&'static str>,
}

impl InstallFixture {
    /// Visual Studio 2022 Enterprise with a single tools version.
    pub fn vs2022_enterprise() -> Self {
        InstallFixture {
            base: PF,
            year: 2022,
            edition: "Enterprise",
            tools: vec!["14.30.30705"],
        }
    }

    /// Visual Studio 2019 Community with two tools versions.
    pub fn vs2019_community() -> Self {
        InstallFixture {
            base: PF_X86,
            year: 2019,
            edition: "Community",
            tools: vec!["14.28.29910", "14.29.30133"],
        }
    }

    /// Install directory of this fixture.
    pub fn install_dir(&self) -> PathBuf {
        PathBuf::from(self.base)
            .join("Microsoft Visual Studio")
            .join(self.year.to_string())
            .join(self.edition)
    }

    /// Create the fixture on `host`.
    pub fn apply(&self, host: &mut FakeHost) {
        let msvc = self.install_dir().join("VC").join("Tools").join("MSVC");
        host.add_dir(self.install_dir());
        for tools in &self.tools {
            host.add_dir(msvc.join(tools));
        }
    }
}
