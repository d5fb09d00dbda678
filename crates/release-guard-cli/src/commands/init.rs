//! Init command implementation.

use anyhow::{bail, Result};
use release_guard_core::{CONFIG_FILE, METADATA_FILE};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# release-guard configuration
#
# Every built-in guideline runs by default. Disable one, or downgrade its
# failures to warnings, per rule id:

# [guidelines."RG 1.03"]
# enabled = false

# [guidelines."RG 7.02"]
# optional = true
"#;

const DEFAULT_METADATA: &str = r#"# Product metadata consumed by release-guard.

# product_name = "widget"
# leading_repository = "https://github.com/acme/widget"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_template(Path::new(CONFIG_FILE), DEFAULT_CONFIG, force)?;
    write_template(Path::new(METADATA_FILE), DEFAULT_METADATA, force)?;

    println!("Created {CONFIG_FILE} and {METADATA_FILE}");
    println!("\nNext steps:");
    println!("  1. Fill in {METADATA_FILE}");
    println!("  2. Run: release-guard check");

    Ok(())
}

fn write_template(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, content)?;
    Ok(())
}
