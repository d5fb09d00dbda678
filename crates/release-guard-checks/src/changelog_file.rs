//! Guideline recommending a changelog.

use release_guard_core::{CheckResult, Guideline};
use std::path::PathBuf;

/// Recommends a `CHANGELOG.md` tracking released changes.
#[derive(Debug, Clone)]
pub struct ChangelogExists {
    base_dir: PathBuf,
    optional: bool,
}

impl ChangelogExists {
    /// Rule id, stable across versions.
    pub const CODE: &'static str = "RG 1.03";

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

impl Guideline for ChangelogExists {
    fn name(&self) -> &'static str {
        "RG 1.03 - Changelog file"
    }

    fn description(&self) -> &'static str {
        "A CHANGELOG.md file lets adopters follow notable changes between releases"
    }

    fn external_description(&self) -> &'static str {
        "https://release-guard.github.io/guidelines/rg-1-03"
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn test(&self) -> CheckResult {
        if self.base_dir.join("CHANGELOG.md").is_file() {
            CheckResult::pass()
        } else {
            CheckResult::fail("no CHANGELOG.md file found at the repository root")
        }
    }
}
