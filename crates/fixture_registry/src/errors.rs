//! Registry error types.
//!
//! Domain-specific errors for fixture loading, parsing, and invariant
//! validation. All variants carry the name of the offending record so that
//! diagnostics identify the fixture that needs fixing.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while loading or validating a fixture registry.
///
/// Parse errors occur when a serialized registry document cannot be
/// deserialized. The remaining variants are invariant violations detected by
/// [`crate::FixtureRegistry::validate`]; each one is a fixture-authoring bug,
/// so validation reports the first violation it finds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Failed to parse fixture registry: {reason}")]
    Parse { reason: String },

    #[error("Duplicate scenario name in registry: {name}")]
    DuplicateScenarioName { name: String },

    #[error("Duplicate template validation name in registry: {name}")]
    DuplicateValidationName { name: String },

    #[error("Scenario '{scenario}' declares no expected files")]
    EmptyExpectedFiles { scenario: String },

    #[error("Scenario '{scenario}' has an invalid expected file path: {path:?} - {reason}")]
    InvalidExpectedPath {
        scenario: String,
        path: String,
        reason: String,
    },

    #[error("Template validation '{validation}' declares no required content")]
    EmptyContains { validation: String },

    #[error("Template validation '{validation}' contains an empty required substring")]
    EmptyContainsEntry { validation: String },
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
