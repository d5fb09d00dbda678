//! Check command implementation.

use anyhow::{Context, Result};
use release_guard_checks::catalogue;
use release_guard_core::{Config, ConsoleReporter, GuidelineRunner, Palette, CONFIG_FILE};
use std::path::Path;
use tracing::{info, warn};

/// Runs the check command.
///
/// The process exit status is the machine-readable contract of the tool:
/// 0 when every mandatory guideline passed, 1 otherwise.
pub fn run(
    path: &Path,
    only: Option<&str>,
    config_path: Option<&Path>,
    no_color: bool,
) -> Result<()> {
    let config = load_config(path, config_path)?;

    let mut guidelines = catalogue::configured_guidelines(path, &config);

    if let Some(filter) = only {
        let codes: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .collect();
        for code in &codes {
            if !guidelines.iter().any(|g| g.name().starts_with(code)) {
                warn!("unknown or disabled guideline: {}", code);
            }
        }
        guidelines = catalogue::filter_by_codes(guidelines, &codes);
    }

    let runner = GuidelineRunner::new(guidelines);
    info!(
        "checking {} against {} guideline(s)",
        path.display(),
        runner.guideline_count()
    );

    let palette = if no_color {
        Palette::plain()
    } else {
        Palette::colored()
    };
    let mut reporter = ConsoleReporter::new(palette);

    if runner.run(&mut reporter).is_err() {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves the configuration: an explicit `--config` path, then
/// `release-guard.toml` in the checked directory, then defaults.
fn load_config(path: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(config_path) = explicit {
        return Config::from_file(config_path)
            .with_context(|| format!("failed to load config: {}", config_path.display()));
    }

    let default_path = path.join(CONFIG_FILE);
    if default_path.is_file() {
        return Config::from_file(&default_path)
            .with_context(|| format!("failed to load config: {}", default_path.display()));
    }

    Ok(Config::default())
}
