//! Module descriptor identifying the extension under test.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;

/// Identity of the extension module a registry describes.
///
/// Serialized in camelCase (`moduleId`, `moduleName`) so the persisted form
/// matches the fixture documents this registry is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
    /// Stable identifier of the module, e.g. `vcs-github`.
    pub module_id: String,
    /// Human-readable module name for reports and diagnostics.
    pub module_name: String,
}

impl ModuleDescriptor {
    pub fn new(module_id: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            module_name: module_name.into(),
        }
    }
}
