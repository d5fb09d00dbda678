//! The guideline contract every compliance rule implements.

use crate::types::CheckResult;

/// A single release guideline.
///
/// Implement this trait to plug a new rule into the runner. Guidelines are
/// constructed once per run, queried for their descriptive fields, and
/// invoked exactly once via [`Guideline::test`]. No guideline holds state
/// across runs.
///
/// # Example
///
/// ```ignore
/// use release_guard_core::{CheckResult, Guideline};
///
/// pub struct NoticeFileExists {
///     base_dir: std::path::PathBuf,
/// }
///
/// impl Guideline for NoticeFileExists {
///     fn name(&self) -> &'static str { "RG 7.03 - NOTICE file" }
///     fn description(&self) -> &'static str { "Repositories must ship a NOTICE file" }
///     fn external_description(&self) -> &'static str { "https://release-guard.github.io/guidelines/rg-7-03" }
///     fn is_optional(&self) -> bool { false }
///
///     fn test(&self) -> CheckResult {
///         if self.base_dir.join("NOTICE").is_file() {
///             CheckResult::pass()
///         } else {
///             CheckResult::fail("no NOTICE file found in the repository root")
///         }
///     }
/// }
/// ```
pub trait Guideline: Send + Sync {
    /// Returns the stable identity string, `"<rule-id> - <short title>"`
    /// (e.g. `"RG 1.01 - README file"`).
    ///
    /// External tooling may grep for the rule id, so the returned value must
    /// remain stable across versions.
    fn name(&self) -> &'static str;

    /// Returns the human-readable rationale for the rule.
    fn description(&self) -> &'static str;

    /// Returns a documentation locator explaining the rule in depth.
    ///
    /// The value is surfaced verbatim in notifications and is never
    /// validated as a live resource.
    fn external_description(&self) -> &'static str;

    /// Whether a failure of this guideline is tolerable.
    ///
    /// Fixed at construction time; the runner queries it once per run and
    /// treats the answer as constant.
    fn is_optional(&self) -> bool;

    /// Evaluates the guideline and returns the outcome.
    ///
    /// May perform arbitrary I/O. Every internal failure (unreadable
    /// directory, missing metadata file, parse error) must be captured as a
    /// failing [`CheckResult`] with a descriptive error text; implementations
    /// must not panic and have no error channel besides the result itself.
    /// This guarantee keeps the runner free of rule-specific error handling.
    fn test(&self) -> CheckResult;
}

/// Type alias for boxed `Guideline` trait objects.
pub type GuidelineBox = Box<dyn Guideline>;
