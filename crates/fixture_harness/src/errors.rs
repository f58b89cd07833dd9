//! Harness error types.

use thiserror::Error;

use crate::generator::GeneratorError;
use crate::template_store::TemplateStoreError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error conditions a fixture check can fail with.
///
/// Every variant names the record that failed so that a report entry is
/// diagnosable on its own. Generator and template store failures are
/// propagated, never recovered; the assertions themselves are deterministic,
/// so there are no retries.
#[derive(Error, Debug)]
pub enum Error {
    /// The external generator call failed for a scenario.
    #[error("Generator failed for scenario '{scenario}': {source}")]
    GeneratorFailure {
        scenario: String,
        #[source]
        source: GeneratorError,
    },

    /// One or more expected output files were absent from the generated set.
    #[error("Scenario '{scenario}' is missing expected output files: {}", missing.join(", "))]
    MissingOutputFile {
        scenario: String,
        /// Every expected path absent from the generator output.
        missing: Vec<String>,
    },

    /// The template content could not be loaded for a validation.
    #[error("Template validation '{validation}' could not read its template: {source}")]
    TemplateUnavailable {
        validation: String,
        #[source]
        source: TemplateStoreError,
    },

    /// One or more required substrings were absent from the template content.
    #[error(
        "Template '{template}' is missing expected content for validation '{validation}': {}",
        missing.join(", ")
    )]
    MissingExpectedContent {
        validation: String,
        template: String,
        /// Every required substring absent from the template.
        missing: Vec<String>,
    },
}
