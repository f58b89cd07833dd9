//! Generation scenarios: input configuration paired with expected output.

use serde::{Deserialize, Serialize};

use crate::errors::{RegistryError, RegistryResult};
use crate::extension_config::ExtensionConfig;

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;

/// One test case pairing a generator configuration with the output file
/// paths that configuration must produce.
///
/// `expected_files` is a containment assertion: every listed path must be
/// present in the generator's output set, extra generated files are
/// tolerated. Paths are relative to the generated output root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Unique name within a registry, used in diagnostics and reports.
    pub name: String,
    /// Human-readable description of what the scenario exercises.
    pub description: String,
    /// Configuration handed to the external generator.
    pub config: ExtensionConfig,
    /// Relative paths that must appear in the generated output.
    pub expected_files: Vec<String>,
}

impl Scenario {
    /// Check the per-scenario invariants: a non-empty expected file list
    /// whose entries are all non-empty relative paths.
    pub fn validate(&self) -> RegistryResult<()> {
        if self.expected_files.is_empty() {
            return Err(RegistryError::EmptyExpectedFiles {
                scenario: self.name.clone(),
            });
        }

        for path in &self.expected_files {
            if path.is_empty() {
                return Err(RegistryError::InvalidExpectedPath {
                    scenario: self.name.clone(),
                    path: path.clone(),
                    reason: "path must not be empty".to_string(),
                });
            }
            if path.starts_with('/') || path.starts_with('\\') {
                return Err(RegistryError::InvalidExpectedPath {
                    scenario: self.name.clone(),
                    path: path.clone(),
                    reason: "path must be relative".to_string(),
                });
            }
        }

        Ok(())
    }
}
