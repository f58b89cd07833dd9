//! Template content validations.

use serde::{Deserialize, Serialize};

use crate::errors::{RegistryError, RegistryResult};

#[cfg(test)]
#[path = "template_validation_tests.rs"]
mod tests;

/// One test case asserting that literal content fragments exist within a
/// named template resource.
///
/// The assertion targets the raw template source, not rendered output, so
/// the required fragments may themselves contain templating syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateValidation {
    /// Unique name within a registry, used in diagnostics and reports.
    pub name: String,
    /// Human-readable description of the behavior the template must encode.
    pub description: String,
    /// Path of the template resource within the template store.
    pub template: String,
    /// Literal substrings that must all occur in the template content.
    pub contains: Vec<String>,
}

impl TemplateValidation {
    /// Check the per-validation invariants: a non-empty `contains` list with
    /// no empty entries.
    pub fn validate(&self) -> RegistryResult<()> {
        if self.contains.is_empty() {
            return Err(RegistryError::EmptyContains {
                validation: self.name.clone(),
            });
        }

        if self.contains.iter().any(|entry| entry.is_empty()) {
            return Err(RegistryError::EmptyContainsEntry {
                validation: self.name.clone(),
            });
        }

        Ok(())
    }
}
