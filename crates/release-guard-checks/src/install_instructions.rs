//! Guideline recommending installation instructions.

use release_guard_core::{CheckResult, Guideline};
use std::path::PathBuf;

/// Recommends an `INSTALL.md` describing how to set the product up.
///
/// Optional by default: products whose README already covers installation do
/// not have to split it out.
#[derive(Debug, Clone)]
pub struct InstallInstructionsExist {
    base_dir: PathBuf,
    optional: bool,
}

impl InstallInstructionsExist {
    /// Rule id, stable across versions.
    pub const CODE: &'static str = "RG 1.02";

    /// Creates the guideline for `base_dir`; optional by default.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            optional: true,
        }
    }

    /// Sets whether a failure of this guideline is tolerable.
    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

impl Guideline for InstallInstructionsExist {
    fn name(&self) -> &'static str {
        "RG 1.02 - Install instructions"
    }

    fn description(&self) -> &'static str {
        "An INSTALL.md file walks adopters through a local or production setup of the product"
    }

    fn external_description(&self) -> &'static str {
        "https://release-guard.github.io/guidelines/rg-1-02"
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn test(&self) -> CheckResult {
        if self.base_dir.join("INSTALL.md").is_file() {
            CheckResult::pass()
        } else {
            CheckResult::fail("no INSTALL.md file found at the repository root")
        }
    }
}
