//! The ordered catalogue of built-in guidelines.

use release_guard_core::{Config, GuidelineBox};
use std::path::Path;

use crate::{
    ChangelogExists, CopyrightHeadersPresent, InstallInstructionsExist, LeadingRepositoryDefined,
    LicenseFileExists, ReadmeExists,
};

/// Returns the full built-in catalogue for `dir`, in evaluation order.
///
/// Order is part of the reporting contract: notifications appear in exactly
/// this sequence.
#[must_use]
pub fn default_guidelines(dir: &Path) -> Vec<GuidelineBox> {
    vec![
        Box::new(ReadmeExists::new(dir)),
        Box::new(InstallInstructionsExist::new(dir)),
        Box::new(ChangelogExists::new(dir)),
        Box::new(LeadingRepositoryDefined::new(dir)),
        Box::new(LicenseFileExists::new(dir)),
        Box::new(CopyrightHeadersPresent::new(dir)),
    ]
}

/// Returns the catalogue for `dir` with `config` overrides applied.
///
/// Disabled guidelines are dropped; `optional` overrides replace the
/// catalogue default at construction time.
#[must_use]
pub fn configured_guidelines(dir: &Path, config: &Config) -> Vec<GuidelineBox> {
    macro_rules! configured {
        ($list:ident, $check:ty) => {
            if config.is_enabled(<$check>::CODE) {
                let check = <$check>::new(dir);
                let check = match config.optional_override(<$check>::CODE) {
                    Some(optional) => check.optional(optional),
                    None => check,
                };
                $list.push(Box::new(check) as GuidelineBox);
            } else {
                tracing::debug!(code = <$check>::CODE, "guideline disabled by config");
            }
        };
    }

    let mut guidelines: Vec<GuidelineBox> = Vec::new();
    configured!(guidelines, ReadmeExists);
    configured!(guidelines, InstallInstructionsExist);
    configured!(guidelines, ChangelogExists);
    configured!(guidelines, LeadingRepositoryDefined);
    configured!(guidelines, LicenseFileExists);
    configured!(guidelines, CopyrightHeadersPresent);
    guidelines
}

/// Keeps only the guidelines whose rule id is in `codes`.
///
/// Matching is by the id prefix of [`Guideline::name`], so both
/// `"RG 1.01"` and the full `"RG 1.01 - README file"` select the README
/// guideline.
///
/// [`Guideline::name`]: release_guard_core::Guideline::name
#[must_use]
pub fn filter_by_codes(guidelines: Vec<GuidelineBox>, codes: &[&str]) -> Vec<GuidelineBox> {
    guidelines
        .into_iter()
        .filter(|g| codes.iter().any(|code| g.name().starts_with(code)))
        .collect()
}
