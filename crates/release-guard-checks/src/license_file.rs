//! Guideline requiring a license file.

use release_guard_core::{CheckResult, Guideline};
use std::path::PathBuf;

/// File names accepted as the repository license.
const LICENSE_CANDIDATES: &[&str] = &["LICENSE", "LICENSE.md", "LICENSE.txt"];

/// Requires a license file at the root of the checked directory.
#[derive(Debug, Clone)]
pub struct LicenseFileExists {
    base_dir: PathBuf,
    optional: bool,
}

impl LicenseFileExists {
    /// Rule id, stable across versions.
    pub const CODE: &'static str = "RG 7.01";

    /// Creates the guideline for `base_dir`; mandatory by default.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            optional: false,
        }
    }

    /// Sets whether a failure of this guideline is tolerable.
    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

impl Guideline for LicenseFileExists {
    fn name(&self) -> &'static str {
        "RG 7.01 - License file"
    }

    fn description(&self) -> &'static str {
        "Every repository must state its license in a LICENSE file at the repository root"
    }

    fn external_description(&self) -> &'static str {
        "https://release-guard.github.io/guidelines/rg-7-01"
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn test(&self) -> CheckResult {
        let found = LICENSE_CANDIDATES
            .iter()
            .any(|name| self.base_dir.join(name).is_file());

        if found {
            CheckResult::pass()
        } else {
            CheckResult::fail("no LICENSE, LICENSE.md or LICENSE.txt file found at the repository root")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_for_any_accepted_license_name() {
        for name in LICENSE_CANDIDATES {
            let dir = tempfile::tempdir().expect("tempdir");
            std::fs::write(dir.path().join(name), "Apache-2.0\n").expect("write license");

            assert!(
                LicenseFileExists::new(dir.path()).test().passed(),
                "{name} should satisfy the guideline"
            );
        }
    }

    #[test]
    fn fails_when_license_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");

        let result = LicenseFileExists::new(dir.path()).test();
        assert!(!result.passed());
        assert!(result
            .error_description()
            .is_some_and(|d| d.contains("LICENSE")));
    }
}
