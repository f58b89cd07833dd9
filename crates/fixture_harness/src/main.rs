//! Fixture harness runner.
//!
//! This binary evaluates an extension fixture registry against a template
//! directory and, optionally, a directory of pre-generated output, then
//! writes a markdown report for CI/CD systems.
//!
//! ## Usage
//!
//! ```bash
//! # Validate the built-in GitHub registry against a template checkout
//! cargo run --bin fixture_harness -- --templates-dir ./templates
//!
//! # Also check generation scenarios against pre-generated output
//! # (one subdirectory per scenario module id under the given root)
//! cargo run --bin fixture_harness -- \
//!     --templates-dir ./templates --generated-dir ./out
//!
//! # Load a registry from a TOML document instead of the built-in fixtures
//! cargo run --bin fixture_harness -- \
//!     --registry fixtures.toml --templates-dir ./templates
//!
//! # Only check registry invariants, no collaborators needed
//! cargo run --bin fixture_harness -- --check-only
//! ```

use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};

use fixture_harness::report::render_markdown;
use fixture_harness::{
    DirectorySnapshotGenerator, FilesystemTemplateStore, FixtureReport, FixtureRunner,
};
use fixture_registry::FixtureRegistry;

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let matches = Command::new("fixture_harness")
        .version("1.0")
        .about("Evaluates extension fixture registries against generated output and templates")
        .arg(
            Arg::new("registry")
                .long("registry")
                .help("Path to a TOML fixture registry (default: built-in GitHub CI/CD fixtures)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("templates-dir")
                .long("templates-dir")
                .help("Root directory of template resources; template validations are skipped when absent")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("generated-dir")
                .long("generated-dir")
                .help("Root of pre-generated output, one subdirectory per module id; scenarios are skipped when absent")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Path for the markdown report")
                .value_name("FILE")
                .default_value("fixture-report.md"),
        )
        .arg(
            Arg::new("check-only")
                .long("check-only")
                .help("Only validate registry invariants, don't run any checks")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if let Err(e) = run_harness(&matches).await {
        error!(error = %e, "Fixture harness failed");
        process::exit(1);
    }
}

async fn run_harness(matches: &clap::ArgMatches) -> Result<()> {
    let registry = load_registry(matches)?;

    info!(
        module_id = registry.module().module_id,
        module_name = registry.module().module_name,
        scenarios = registry.scenarios().count(),
        template_validations = registry.template_validations().count(),
        "Loaded fixture registry"
    );

    if matches.get_flag("check-only") {
        info!("Registry invariants hold, exiting as requested");
        return Ok(());
    }

    let templates_dir = matches.get_one::<String>("templates-dir").map(PathBuf::from);
    let generated_dir = matches.get_one::<String>("generated-dir").map(PathBuf::from);

    // The runner needs both collaborators even when one side is skipped; a
    // skipped side is never invoked.
    let generator =
        DirectorySnapshotGenerator::new(generated_dir.clone().unwrap_or_else(|| ".".into()));
    let store =
        FilesystemTemplateStore::new(templates_dir.clone().unwrap_or_else(|| ".".into()));
    let runner = FixtureRunner::new(generator, store);

    let mut report = FixtureReport::new(registry.module().clone());

    if generated_dir.is_some() {
        report.scenario_outcomes = runner.run_scenarios(&registry).await;
    } else {
        warn!("No --generated-dir given, skipping generation scenarios");
    }

    if templates_dir.is_some() {
        report.validation_outcomes = runner.run_template_validations(&registry).await;
    } else {
        warn!("No --templates-dir given, skipping template validations");
    }

    for outcome in report.outcomes() {
        let status = if outcome.passed { "PASS" } else { "FAIL" };
        info!(
            check = outcome.name,
            status = status,
            duration_ms = outcome.duration.as_millis(),
            "Check result"
        );
        if let Some(e) = &outcome.error {
            error!(check = outcome.name, error = %e, "Check failure details");
        }
    }

    info!(
        total = report.total(),
        passed = report.passed(),
        failed = report.failed(),
        "=== Fixture Run Summary ==="
    );

    let report_path = matches.get_one::<String>("report").unwrap();
    std::fs::write(report_path, render_markdown(&report))
        .with_context(|| format!("Failed to write report to {report_path}"))?;
    info!(path = report_path, "Report written");

    if !report.all_passed() {
        error!("Fixture run failed with {} failed checks", report.failed());
        process::exit(1);
    }

    info!("All fixture checks passed");
    Ok(())
}

fn load_registry(matches: &clap::ArgMatches) -> Result<FixtureRegistry> {
    match matches.get_one::<String>("registry") {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read registry file {path}"))?;
            FixtureRegistry::from_toml_str(&content)
                .with_context(|| format!("Failed to load registry from {path}"))
        }
        None => Ok(github_cicd_fixtures::registry()),
    }
}
