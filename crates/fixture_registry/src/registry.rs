//! The fixture registry: module identity plus scenario and validation records.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::descriptor::ModuleDescriptor;
use crate::errors::{RegistryError, RegistryResult};
use crate::scenario::Scenario;
use crate::template_validation::TemplateValidation;

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// Immutable registry of generation scenarios and template validations for
/// one extension module.
///
/// A registry is fully constructed at load time, either through
/// [`FixtureRegistry::new`] or [`FixtureRegistry::from_toml_str`], and both
/// paths enforce the registry invariants before returning a value. Records
/// are read-only for the duration of a verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRegistry {
    #[serde(flatten)]
    module: ModuleDescriptor,
    scenarios: Vec<Scenario>,
    #[serde(default)]
    template_validations: Vec<TemplateValidation>,
}

impl FixtureRegistry {
    /// Construct a registry from in-memory records, enforcing the registry
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] violation found: duplicate
    /// scenario or validation names, empty or non-relative expected file
    /// paths, or empty required content lists.
    pub fn new(
        module: ModuleDescriptor,
        scenarios: Vec<Scenario>,
        template_validations: Vec<TemplateValidation>,
    ) -> RegistryResult<Self> {
        let registry = Self {
            module,
            scenarios,
            template_validations,
        };
        registry.validate()?;

        debug!(
            module_id = registry.module.module_id,
            scenarios = registry.scenarios.len(),
            template_validations = registry.template_validations.len(),
            "Constructed fixture registry"
        );

        Ok(registry)
    }

    /// Load a registry from a serialized TOML document.
    ///
    /// The document uses the persisted fixture shape: camelCase keys,
    /// `moduleId`/`moduleName` at the top level, and `[[scenarios]]` /
    /// `[[templateValidations]]` record tables.
    pub fn from_toml_str(content: &str) -> RegistryResult<Self> {
        let registry: Self = toml::from_str(content).map_err(|e| RegistryError::Parse {
            reason: e.to_string(),
        })?;
        registry.validate()?;
        Ok(registry)
    }

    /// Check all registry invariants, returning the first violation found.
    pub fn validate(&self) -> RegistryResult<()> {
        let mut scenario_names = HashSet::new();
        for scenario in &self.scenarios {
            if !scenario_names.insert(scenario.name.as_str()) {
                return Err(RegistryError::DuplicateScenarioName {
                    name: scenario.name.clone(),
                });
            }
            scenario.validate()?;
        }

        let mut validation_names = HashSet::new();
        for validation in &self.template_validations {
            if !validation_names.insert(validation.name.as_str()) {
                return Err(RegistryError::DuplicateValidationName {
                    name: validation.name.clone(),
                });
            }
            validation.validate()?;
        }

        Ok(())
    }

    /// The module this registry describes.
    pub fn module(&self) -> &ModuleDescriptor {
        &self.module
    }

    /// Iterate over the generation scenarios. Re-iterable and side-effect
    /// free.
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    /// Iterate over the template validations. Re-iterable and side-effect
    /// free.
    pub fn template_validations(&self) -> impl Iterator<Item = &TemplateValidation> {
        self.template_validations.iter()
    }

    /// Look up a scenario by name.
    pub fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Look up a template validation by name.
    pub fn template_validation(&self, name: &str) -> Option<&TemplateValidation> {
        self.template_validations.iter().find(|v| v.name == name)
    }

    /// Total number of records, scenarios and validations combined.
    pub fn len(&self) -> usize {
        self.scenarios.len() + self.template_validations.len()
    }

    /// Whether the registry holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty() && self.template_validations.is_empty()
    }
}
