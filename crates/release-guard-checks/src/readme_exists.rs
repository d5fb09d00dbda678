//! Guideline requiring a README file at the repository root.

use release_guard_core::{CheckResult, Guideline};
use std::path::{Path, PathBuf};

/// Requires a `README.md` at the root of the checked directory.
#[derive(Debug, Clone)]
pub struct ReadmeExists {
    base_dir: PathBuf,
    optional: bool,
}

impl ReadmeExists {
    /// Rule id, stable across versions.
    pub const CODE: &'static str = "RG 1.01";

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

impl Guideline for ReadmeExists {
    fn name(&self) -> &'static str {
        "RG 1.01 - README file"
    }

    fn description(&self) -> &'static str {
        "A README.md file gives every visitor the product overview, entrypoints and contribution basics"
    }

    fn external_description(&self) -> &'static str {
        "https://release-guard.github.io/guidelines/rg-1-01"
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn test(&self) -> CheckResult {
        if self.base_dir.join("README.md").is_file() {
            CheckResult::pass()
        } else {
            CheckResult::fail(format!(
                "no README.md file found in {}",
                display_dir(&self.base_dir)
            ))
        }
    }
}

fn display_dir(dir: &Path) -> String {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        "the current directory".to_string()
    } else {
        dir.display().to_string()
    }
}
