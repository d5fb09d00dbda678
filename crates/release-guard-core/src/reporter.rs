//! Output sink for runner notifications.

/// Presentation boundary for guideline runs.
///
/// The runner emits every notification through this trait and never writes
/// to stdout/stderr itself, so sinks can be substituted (e.g. a recording
/// sink in tests). Implementations must not fail; a reporter is a pure
/// side-effect writer.
pub trait Reporter {
    /// Announces the start of a guideline evaluation.
    fn title(&mut self, message: &str);

    /// Reports neutral status information.
    fn info(&mut self, message: &str);

    /// Reports a failure of an optional guideline.
    fn warning(&mut self, message: &str);

    /// Reports a failure of a mandatory guideline.
    fn error(&mut self, message: &str);
}

/// ANSI style strings applied per notification category.
///
/// Styling is a construction-time value of the console sink; neither the
/// runner nor the guideline contract knows about presentation.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Style prefix for title notifications.
    pub title: &'static str,
    /// Style prefix for info notifications.
    pub info: &'static str,
    /// Style prefix for warning notifications.
    pub warning: &'static str,
    /// Style prefix for error notifications.
    pub error: &'static str,
    /// Reset sequence appended after every styled line.
    pub reset: &'static str,
}

impl Palette {
    /// Terminal styling: bold titles, blue info, yellow warnings, red errors.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            title: "\x1b[1m",
            info: "\x1b[34m",
            warning: "\x1b[33m",
            error: "\x1b[31m",
            reset: "\x1b[0m",
        }
    }

    /// No styling at all, for non-terminal output.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            title: "",
            info: "",
            warning: "",
            error: "",
            reset: "",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

/// Stdout-backed reporter.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    palette: Palette,
}

impl ConsoleReporter {
    /// Creates a reporter writing to stdout with the given palette.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn print_styled(style: &str, reset: &str, message: &str) {
        println!("{style}{message}{reset}");
    }
}

impl Reporter for ConsoleReporter {
    fn title(&mut self, message: &str) {
        Self::print_styled(self.palette.title, self.palette.reset, message);
    }

    fn info(&mut self, message: &str) {
        Self::print_styled(self.palette.info, self.palette.reset, message);
    }

    fn warning(&mut self, message: &str) {
        Self::print_styled(self.palette.warning, self.palette.reset, message);
    }

    fn error(&mut self, message: &str) {
        Self::print_styled(self.palette.error, self.palette.reset, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_has_no_escape_codes() {
        let palette = Palette::plain();
        assert!(palette.title.is_empty());
        assert!(palette.error.is_empty());
        assert!(palette.reset.is_empty());
    }

    #[test]
    fn default_palette_is_colored() {
        let palette = Palette::default();
        assert_eq!(palette.title, "\x1b[1m");
        assert_eq!(palette.reset, "\x1b[0m");
    }
}
