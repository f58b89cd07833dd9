use super::*;
use crate::errors::Error;
use fixture_registry::ModuleDescriptor;
use std::time::Duration;

fn outcome(name: &str, passed: bool, error: Option<Error>) -> CheckOutcome {
    CheckOutcome {
        name: name.to_string(),
        description: format!("description for {name}"),
        passed,
        error,
        duration: Duration::from_millis(5),
    }
}

fn report_with_outcomes() -> FixtureReport {
    FixtureReport {
        module: ModuleDescriptor::new("vcs-github", "GitHub CI/CD & Actions"),
        scenario_outcomes: vec![
            outcome("github-actions-basic", true, None),
            outcome(
                "github-full-security",
                false,
                Some(Error::MissingOutputFile {
                    scenario: "github-full-security".to_string(),
                    missing: vec![".github/dependabot.yml".to_string()],
                }),
            ),
        ],
        validation_outcomes: vec![outcome("oidc-authentication", true, None)],
    }
}

#[test]
fn test_render_includes_module_and_summary() {
    let markdown = render_markdown(&report_with_outcomes());

    assert!(markdown.contains("# Fixture Report: GitHub CI/CD & Actions"));
    assert!(markdown.contains("Module: `vcs-github`"));
    assert!(markdown.contains("| Total Checks | 3 |"));
    assert!(markdown.contains("| Passed | 2 |"));
    assert!(markdown.contains("| Failed | 1 |"));
}

#[test]
fn test_render_sections_per_record_kind() {
    let markdown = render_markdown(&report_with_outcomes());

    assert!(markdown.contains("## Generation Scenarios"));
    assert!(markdown.contains("## Template Validations"));
    assert!(markdown.contains("### ✅ github-actions-basic"));
    assert!(markdown.contains("### ❌ github-full-security"));
}

#[test]
fn test_render_includes_failure_diagnostics() {
    let markdown = render_markdown(&report_with_outcomes());

    assert!(markdown.contains(".github/dependabot.yml"));
    assert!(markdown.contains("- **Status**: FAILED"));
    assert!(markdown.contains("description for github-full-security"));
}

#[test]
fn test_render_empty_report_omits_record_sections() {
    let report = FixtureReport::new(ModuleDescriptor::new("vcs-github", "GitHub CI/CD & Actions"));
    let markdown = render_markdown(&report);

    assert!(markdown.contains("| Total Checks | 0 |"));
    assert!(!markdown.contains("## Generation Scenarios"));
    assert!(!markdown.contains("## Template Validations"));
}
