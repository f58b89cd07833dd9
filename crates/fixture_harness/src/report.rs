//! Markdown rendering of fixture run reports for CI/CD systems.

use std::fmt::Write;

use crate::runner::{CheckOutcome, FixtureReport};

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// Render a fixture report as a markdown document with a summary table and
/// one section per record.
pub fn render_markdown(report: &FixtureReport) -> String {
    let mut out = String::new();

    // fmt::Write into a String is infallible.
    let _ = writeln!(out, "# Fixture Report: {}", report.module.module_name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Module: `{}`", report.module.module_id);
    let _ = writeln!(out);

    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Value |");
    let _ = writeln!(out, "|--------|-------|");
    let _ = writeln!(out, "| Total Checks | {} |", report.total());
    let _ = writeln!(out, "| Passed | {} |", report.passed());
    let _ = writeln!(out, "| Failed | {} |", report.failed());
    let _ = writeln!(
        out,
        "| Total Duration | {:.2}s |",
        report
            .outcomes()
            .map(|o| o.duration.as_secs_f64())
            .sum::<f64>()
    );
    let _ = writeln!(out);

    if !report.scenario_outcomes.is_empty() {
        let _ = writeln!(out, "## Generation Scenarios");
        let _ = writeln!(out);
        for outcome in &report.scenario_outcomes {
            render_outcome(&mut out, outcome);
        }
    }

    if !report.validation_outcomes.is_empty() {
        let _ = writeln!(out, "## Template Validations");
        let _ = writeln!(out);
        for outcome in &report.validation_outcomes {
            render_outcome(&mut out, outcome);
        }
    }

    out
}

fn render_outcome(out: &mut String, outcome: &CheckOutcome) {
    let status = if outcome.passed { "✅" } else { "❌" };

    let _ = writeln!(out, "### {} {}", status, outcome.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "- **Description**: {}", outcome.description);
    let _ = writeln!(
        out,
        "- **Status**: {}",
        if outcome.passed { "PASSED" } else { "FAILED" }
    );
    let _ = writeln!(
        out,
        "- **Duration**: {:.2}s",
        outcome.duration.as_secs_f64()
    );

    if let Some(error) = &outcome.error {
        let _ = writeln!(out, "- **Error**: {}", error);
    }

    let _ = writeln!(out);
}
