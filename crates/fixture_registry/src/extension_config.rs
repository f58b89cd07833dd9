//! Extension configuration passed to the external generator.
//!
//! The configuration mirrors the persisted fixture shape: a camelCase record
//! with a `type` discriminator and a `fieldValues` block of per-type
//! generation flags. Field values are strongly typed per extension type
//! instead of a free-form map, so a misspelled flag fails at load time rather
//! than silently disabling a check.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[cfg(test)]
#[path = "extension_config_tests.rs"]
mod tests;

/// Input configuration handed to the external generator for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionConfig {
    /// Identifier the generator uses for this module instance.
    pub module_id: String,
    /// Module kind; only `extension` exists today.
    pub kind: ExtensionKind,
    /// Deployment layers the module participates in.
    #[serde(default)]
    pub layers: BTreeSet<String>,
    /// Whether the module is enabled for generation.
    pub enabled: bool,
    /// Per-extension-type generation flags, discriminated by the `type` field.
    #[serde(flatten)]
    pub field_values: FieldValues,
}

impl ExtensionConfig {
    /// Create an enabled GitHub extension configuration with no layers.
    pub fn github(module_id: impl Into<String>, field_values: GithubFieldValues) -> Self {
        Self {
            module_id: module_id.into(),
            kind: ExtensionKind::Extension,
            layers: BTreeSet::new(),
            enabled: true,
            field_values: FieldValues::Github(field_values),
        }
    }

    /// Add a deployment layer.
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layers.insert(layer.into());
        self
    }

    /// The extension type discriminator, as persisted in the `type` field.
    pub fn extension_type(&self) -> &'static str {
        match self.field_values {
            FieldValues::Github(_) => "github",
        }
    }
}

/// Module kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionKind {
    #[default]
    Extension,
}

/// Generation flags for a known extension type.
///
/// Adjacently tagged on the config's `type` field, with the flags themselves
/// under `fieldValues`. One variant per extension type the generator knows
/// how to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "fieldValues", rename_all = "lowercase")]
pub enum FieldValues {
    Github(GithubFieldValues),
}

/// Generation flags for the GitHub CI/CD extension.
///
/// All flags default to off; unknown flags are rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct GithubFieldValues {
    /// Generate the GitHub Actions CI workflow.
    pub enable_actions: bool,
    /// Generate the Dependabot update configuration.
    pub enable_dependabot: bool,
    /// Generate the CodeQL code scanning workflow.
    pub enable_code_scanning: bool,
    /// Enable secret scanning in the generated configuration.
    pub enable_secret_scanning: bool,
    /// Generate per-environment deployment workflows.
    pub enable_deployment: bool,
    /// Enable automatic merging of passing pull requests.
    pub enable_auto_merge: bool,
    /// Environments a deployment workflow is generated for, in rollout order.
    pub deploy_environments: Vec<String>,
}
