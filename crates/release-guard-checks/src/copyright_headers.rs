//! Guideline requiring copyright and license headers in source files.

use ignore::WalkBuilder;
use release_guard_core::{CheckResult, Guideline};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions of files expected to carry a header.
const SOURCE_EXTENSIONS: &[&str] = &[
    "rs", "go", "java", "kt", "py", "js", "ts", "c", "h", "cpp", "sh",
];

/// Markers accepted as evidence of a header.
const HEADER_MARKERS: &[&str] = &["Copyright", "SPDX-License-Identifier"];

/// Number of leading lines searched for a marker.
const HEADER_SEARCH_LINES: usize = 20;

/// Cap on file paths listed in the error description.
const MAX_LISTED_FILES: usize = 10;

/// Requires every source file to carry a copyright or SPDX header near the
/// top of the file.
///
/// The scan walks the checked directory with gitignore rules applied and
/// skips hidden directories. Scan and read failures are absorbed into a
/// failing result.
#[derive(Debug, Clone)]
pub struct CopyrightHeadersPresent {
    base_dir: PathBuf,
    optional: bool,
}

impl CopyrightHeadersPresent {
    /// Rule id, stable across versions.
    pub const CODE: &'static str = "RG 7.02";

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

    fn is_source_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
    }

    fn has_header(content: &str) -> bool {
        content
            .lines()
            .take(HEADER_SEARCH_LINES)
            .any(|line| HEADER_MARKERS.iter().any(|marker| line.contains(marker)))
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.base_dir)
            .unwrap_or(path)
            .to_path_buf()
    }

    fn format_missing(missing: &[PathBuf]) -> String {
        let listed: Vec<String> = missing
            .iter()
            .take(MAX_LISTED_FILES)
            .map(|p| p.display().to_string())
            .collect();
        let mut message = format!(
            "{} source file(s) without a copyright and license header: {}",
            missing.len(),
            listed.join(", ")
        );
        if missing.len() > MAX_LISTED_FILES {
            message.push_str(&format!(", and {} more", missing.len() - MAX_LISTED_FILES));
        }
        message
    }
}

impl Guideline for CopyrightHeadersPresent {
    fn name(&self) -> &'static str {
        "RG 7.02 - Copyright and license headers"
    }

    fn description(&self) -> &'static str {
        "All source code should carry appropriate copyright and license notices near the top of each file"
    }

    fn external_description(&self) -> &'static str {
        "https://release-guard.github.io/guidelines/rg-7-02"
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn test(&self) -> CheckResult {
        let mut missing: Vec<PathBuf> = Vec::new();
        let mut scanned = 0usize;

        for entry in WalkBuilder::new(&self.base_dir).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    return CheckResult::fail(format!(
                        "could not scan {}: {err}",
                        self.base_dir.display()
                    ));
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if !Self::is_source_file(path) {
                continue;
            }

            scanned += 1;
            match std::fs::read_to_string(path) {
                Ok(content) if Self::has_header(&content) => {}
                Ok(_) => missing.push(self.relative(path)),
                Err(err) => {
                    return CheckResult::fail(format!(
                        "could not read {}: {err}",
                        path.display()
                    ));
                }
            }
        }

        debug!(scanned, missing = missing.len(), "header scan finished");

        if missing.is_empty() {
            CheckResult::pass()
        } else {
            missing.sort();
            CheckResult::fail(Self::format_missing(&missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "// Copyright (c) 2026 Acme\n// SPDX-License-Identifier: Apache-2.0\n";

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write file");
    }

    #[test]
    fn passes_when_all_source_files_have_headers() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "main.rs", &format!("{HEADER}fn main() {{}}\n"));
        write(dir.path(), "tool.py", "# Copyright (c) 2026 Acme\nprint()\n");

        assert!(CopyrightHeadersPresent::new(dir.path()).test().passed());
    }

    #[test]
    fn fails_and_names_the_offending_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "src/lib.rs", "pub fn f() {}\n");
        write(dir.path(), "main.rs", &format!("{HEADER}fn main() {{}}\n"));

        let result = CopyrightHeadersPresent::new(dir.path()).test();
        assert!(!result.passed());
        let detail = result.error_description().unwrap_or_default();
        assert!(detail.contains("1 source file(s)"));
        assert!(detail.contains("lib.rs"));
        assert!(!detail.contains("main.rs"));
    }

    #[test]
    fn header_must_be_near_the_top() {
        let dir = tempfile::tempdir().expect("tempdir");
        let body = "\n".repeat(HEADER_SEARCH_LINES) + HEADER;
        write(dir.path(), "late.rs", &body);

        assert!(!CopyrightHeadersPresent::new(dir.path()).test().passed());
    }

    #[test]
    fn non_source_files_are_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "notes.txt", "no header here\n");
        write(dir.path(), "data.json", "{}\n");

        assert!(CopyrightHeadersPresent::new(dir.path()).test().passed());
    }

    #[test]
    fn listing_is_capped() {
        let dir = tempfile::tempdir().expect("tempdir");
        for i in 0..(MAX_LISTED_FILES + 3) {
            write(dir.path(), &format!("file{i:02}.rs"), "fn f() {}\n");
        }

        let result = CopyrightHeadersPresent::new(dir.path()).test();
        let detail = result.error_description().unwrap_or_default();
        assert!(detail.contains(&format!("{} source file(s)", MAX_LISTED_FILES + 3)));
        assert!(detail.contains("and 3 more"));
    }
}
