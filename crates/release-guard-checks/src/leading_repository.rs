//! Guideline requiring a leading repository in the product metadata.

use release_guard_core::{CheckResult, Guideline, ProductMetadata, METADATA_FILE};
use std::path::PathBuf;

/// Requires `leading_repository` to be set in the product metadata file.
///
/// Metadata load failures are absorbed into a failing result; this check
/// never propagates an error of its own.
#[derive(Debug, Clone)]
pub struct LeadingRepositoryDefined {
    base_dir: PathBuf,
    optional: bool,
}

impl LeadingRepositoryDefined {
    /// Rule id, stable across versions.
    pub const CODE: &'static str = "RG 2.04";

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

impl Guideline for LeadingRepositoryDefined {
    fn name(&self) -> &'static str {
        "RG 2.04 - Leading product repository"
    }

    fn description(&self) -> &'static str {
        "A defined leading product repository makes it easy for all stakeholders to identify the entrypoint to a product"
    }

    fn external_description(&self) -> &'static str {
        "https://release-guard.github.io/guidelines/rg-2-04"
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn test(&self) -> CheckResult {
        let metadata = match ProductMetadata::from_dir(&self.base_dir) {
            Ok(metadata) => metadata,
            Err(err) => {
                return CheckResult::fail(format!(
                    "the leading_repository property must be defined in {METADATA_FILE}, but the metadata could not be loaded: {err}"
                ));
            }
        };

        if metadata.leading_repository().is_some() {
            CheckResult::pass()
        } else {
            CheckResult::fail(format!(
                "the leading_repository property must be defined in {METADATA_FILE}"
            ))
        }
    }
}
