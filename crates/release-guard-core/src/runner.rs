//! Drives an ordered list of guidelines and aggregates the outcome.

use thiserror::Error;
use tracing::debug;

use crate::guideline::GuidelineBox;
use crate::reporter::Reporter;

/// Aggregate failure of a guideline run.
///
/// Carries no per-guideline detail; everything worth reporting already went
/// through the [`Reporter`] while the run was in progress. Callers map this
/// to a non-zero process exit status.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("not all mandatory guidelines have passed")]
pub struct RunFailed;

/// Executes guidelines strictly in order and computes one aggregate outcome.
///
/// The runner holds only the ordered list it was constructed with. Each
/// guideline is invoked exactly once; an empty list is a vacuously
/// successful run.
pub struct GuidelineRunner {
    guidelines: Vec<GuidelineBox>,
}

impl GuidelineRunner {
    /// Creates a runner over an ordered list of guidelines.
    #[must_use]
    pub fn new(guidelines: Vec<GuidelineBox>) -> Self {
        Self { guidelines }
    }

    /// Returns the number of guidelines in this run.
    #[must_use]
    pub fn guideline_count(&self) -> usize {
        self.guidelines.len()
    }

    /// Runs every guideline in sequence, emitting notifications through
    /// `reporter`.
    ///
    /// A failing mandatory guideline makes the aggregate outcome a failure;
    /// later successes never reverse it. A failing optional guideline is
    /// reported as a warning and does not escalate.
    ///
    /// # Errors
    ///
    /// Returns [`RunFailed`] when at least one mandatory guideline failed.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<(), RunFailed> {
        let mut all_passed = true;
        let mut warnings = 0usize;
        let mut failures = 0usize;

        for guideline in &self.guidelines {
            reporter.title(&format!("Checking guideline: {}", guideline.name()));
            debug!(guideline = guideline.name(), "evaluating");

            let result = guideline.test();
            // Constant for the whole run; queried once per guideline.
            let optional = guideline.is_optional();

            if !result.passed() {
                let detail = result.error_description().unwrap_or_default();
                if optional {
                    warnings += 1;
                    reporter.warning(&format!(
                        "Warning: optional guideline '{}' failed.\n\t{}\n\tMore info: {}",
                        guideline.name(),
                        detail,
                        guideline.external_description(),
                    ));
                } else {
                    failures += 1;
                    reporter.error(&format!(
                        "Failed: {}\n\t{}\n\tMore info: {}",
                        guideline.description(),
                        detail,
                        guideline.external_description(),
                    ));
                }
            }

            all_passed = all_passed && (result.passed() || optional);
        }

        if !self.guidelines.is_empty() {
            reporter.info(&format!(
                "{} guideline(s) checked, {} warning(s), {} failure(s)",
                self.guidelines.len(),
                warnings,
                failures,
            ));
        }

        if all_passed {
            Ok(())
        } else {
            Err(RunFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guideline::Guideline;
    use crate::types::CheckResult;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Title(String),
        Info(String),
        Warning(String),
        Error(String),
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Vec<Event>,
    }

    impl RecordingReporter {
        fn titles(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Title(m) => Some(m.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn warnings(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Warning(m) => Some(m.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn errors(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Error(m) => Some(m.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Reporter for RecordingReporter {
        fn title(&mut self, message: &str) {
            self.events.push(Event::Title(message.to_string()));
        }
        fn info(&mut self, message: &str) {
            self.events.push(Event::Info(message.to_string()));
        }
        fn warning(&mut self, message: &str) {
            self.events.push(Event::Warning(message.to_string()));
        }
        fn error(&mut self, message: &str) {
            self.events.push(Event::Error(message.to_string()));
        }
    }

    struct StubGuideline {
        name: &'static str,
        optional: bool,
        result: CheckResult,
        optional_queries: Arc<AtomicUsize>,
    }

    impl StubGuideline {
        fn passing(name: &'static str) -> Self {
            Self {
                name,
                optional: false,
                result: CheckResult::pass(),
                optional_queries: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing(name: &'static str, detail: &str) -> Self {
            Self {
                name,
                optional: false,
                result: CheckResult::fail(detail),
                optional_queries: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn optional(mut self) -> Self {
            self.optional = true;
            self
        }
    }

    impl Guideline for StubGuideline {
        fn name(&self) -> &'static str {
            self.name
        }
        fn description(&self) -> &'static str {
            "a stub guideline used by runner tests"
        }
        fn external_description(&self) -> &'static str {
            "https://release-guard.github.io/guidelines/stub"
        }
        fn is_optional(&self) -> bool {
            self.optional_queries.fetch_add(1, Ordering::SeqCst);
            self.optional
        }
        fn test(&self) -> CheckResult {
            self.result.clone()
        }
    }

    #[test]
    fn empty_run_succeeds_with_no_notifications() {
        let runner = GuidelineRunner::new(Vec::new());
        let mut reporter = RecordingReporter::default();

        assert_eq!(runner.run(&mut reporter), Ok(()));
        assert!(reporter.events.is_empty());
    }

    #[test]
    fn all_passing_guidelines_succeed() {
        let runner = GuidelineRunner::new(vec![
            Box::new(StubGuideline::passing("RG 1.01 - README file")),
            Box::new(StubGuideline::passing("RG 7.01 - License file")),
        ]);
        let mut reporter = RecordingReporter::default();

        assert_eq!(runner.run(&mut reporter), Ok(()));
        assert!(reporter.warnings().is_empty());
        assert!(reporter.errors().is_empty());
    }

    #[test]
    fn mandatory_failure_fails_the_run() {
        let runner = GuidelineRunner::new(vec![Box::new(StubGuideline::failing(
            "RG 1.01 - README file",
            "missing README",
        ))]);
        let mut reporter = RecordingReporter::default();

        assert_eq!(runner.run(&mut reporter), Err(RunFailed));
        let errors = reporter.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("missing README"));
        assert!(errors[0].contains("https://release-guard.github.io/guidelines/stub"));
    }

    #[test]
    fn optional_failure_only_warns() {
        let runner = GuidelineRunner::new(vec![
            Box::new(StubGuideline::failing("RG 1.02 - Install instructions", "no link").optional()),
            Box::new(StubGuideline::passing("RG 1.01 - README file")),
        ]);
        let mut reporter = RecordingReporter::default();

        assert_eq!(runner.run(&mut reporter), Ok(()));
        let warnings = reporter.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("no link"));
        assert!(warnings[0].contains("RG 1.02 - Install instructions"));
        assert!(reporter.errors().is_empty());
    }

    #[test]
    fn failure_is_not_reversed_by_later_success() {
        let runner = GuidelineRunner::new(vec![
            Box::new(StubGuideline::failing("RG 1.01 - README file", "missing README")),
            Box::new(StubGuideline::passing("RG 7.01 - License file")),
            Box::new(StubGuideline::passing("RG 1.03 - Changelog file")),
        ]);
        let mut reporter = RecordingReporter::default();

        assert_eq!(runner.run(&mut reporter), Err(RunFailed));
    }

    #[test]
    fn titles_follow_input_order() {
        let runner = GuidelineRunner::new(vec![
            Box::new(StubGuideline::passing("RG 1.01 - README file")),
            Box::new(StubGuideline::passing("RG 1.03 - Changelog file")),
            Box::new(StubGuideline::passing("RG 7.01 - License file")),
        ]);
        let mut reporter = RecordingReporter::default();

        runner.run(&mut reporter).expect("run should succeed");
        assert_eq!(
            reporter.titles(),
            vec![
                "Checking guideline: RG 1.01 - README file",
                "Checking guideline: RG 1.03 - Changelog file",
                "Checking guideline: RG 7.01 - License file",
            ]
        );
    }

    #[test]
    fn is_optional_is_queried_once_per_guideline() {
        let queries = Arc::new(AtomicUsize::new(0));
        let guideline = StubGuideline {
            name: "RG 1.01 - README file",
            optional: false,
            result: CheckResult::fail("missing README"),
            optional_queries: Arc::clone(&queries),
        };
        let runner = GuidelineRunner::new(vec![Box::new(guideline)]);
        let mut reporter = RecordingReporter::default();

        let _ = runner.run(&mut reporter);
        assert_eq!(queries.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn summary_is_emitted_for_nonempty_runs() {
        let runner = GuidelineRunner::new(vec![
            Box::new(StubGuideline::failing("RG 1.02 - Install instructions", "no link").optional()),
            Box::new(StubGuideline::failing("RG 1.01 - README file", "missing README")),
            Box::new(StubGuideline::passing("RG 7.01 - License file")),
        ]);
        let mut reporter = RecordingReporter::default();

        let _ = runner.run(&mut reporter);
        let infos: Vec<&Event> = reporter
            .events
            .iter()
            .filter(|e| matches!(e, Event::Info(_)))
            .collect();
        assert_eq!(infos.len(), 1);
        assert_eq!(
            infos[0],
            &Event::Info("3 guideline(s) checked, 1 warning(s), 1 failure(s)".to_string())
        );
    }
}
