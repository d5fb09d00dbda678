//! List guidelines command implementation.

use release_guard_checks::catalogue;
use std::path::Path;

/// Runs the list-guidelines command.
pub fn run() {
    println!("Built-in guidelines:\n");
    println!("{:<42} {:<10} Description", "Guideline", "Default");
    println!("{}", "-".repeat(100));

    for guideline in catalogue::default_guidelines(Path::new(".")) {
        let default = if guideline.is_optional() {
            "optional"
        } else {
            "mandatory"
        };
        println!(
            "{:<42} {:<10} {}",
            guideline.name(),
            default,
            guideline.description()
        );
    }

    println!("\nUse --only to run a subset, e.g.:");
    println!("  release-guard check --only \"RG 1.01,RG 7.02\"");
    println!("\nPer-guideline overrides live in release-guard.toml (see: release-guard init).");
}
