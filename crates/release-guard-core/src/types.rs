//! Core value types for guideline evaluation outcomes.

/// Outcome of a single guideline evaluation.
///
/// A `CheckResult` is immutable once produced and carries no reference back
/// to the guideline that created it; the runner retains that association.
/// The error description is present only for failing results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    passed: bool,
    error_description: Option<String>,
}

impl CheckResult {
    /// Creates a passing result.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            passed: true,
            error_description: None,
        }
    }

    /// Creates a failing result with a human-readable description.
    #[must_use]
    pub fn fail(description: impl Into<String>) -> Self {
        Self {
            passed: false,
            error_description: Some(description.into()),
        }
    }

    /// Whether the guideline's condition held.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Description of the failure, `None` for passing results.
    #[must_use]
    pub fn error_description(&self) -> Option<&str> {
        self.error_description.as_deref()
    }
}
