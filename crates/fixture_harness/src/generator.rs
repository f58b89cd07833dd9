//! Generator collaborator seam.
//!
//! The real generator is an external service that renders an extension
//! configuration into concrete output files. The harness only depends on the
//! [`ExtensionGenerator`] trait; the adapters here cover the two ways a
//! deterministic output set is available without running that service: a
//! fixed in-memory map and a snapshot of a pre-generated output directory.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use fixture_registry::ExtensionConfig;

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;

/// Error raised by a generator invocation.
///
/// The harness propagates generator failures verbatim; it never retries or
/// recovers them.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneratorError {
    message: String,
}

impl GeneratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// External generator contract: render an extension configuration and
/// report the set of produced relative file paths.
///
/// Implementations must be deterministic given identical configuration;
/// the harness relies on that for repeatable pass/fail results.
#[async_trait]
pub trait ExtensionGenerator: Send + Sync {
    async fn generate(
        &self,
        config: &ExtensionConfig,
    ) -> Result<BTreeSet<String>, GeneratorError>;
}

/// Generator backed by a fixed map from module id to output paths.
///
/// Used in tests and dry runs where the generated output set is known up
/// front.
#[derive(Debug, Default, Clone)]
pub struct InMemoryGenerator {
    outputs: HashMap<String, BTreeSet<String>>,
}

impl InMemoryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the output set produced for a module id.
    pub fn with_output<I, S>(mut self, module_id: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs.insert(
            module_id.into(),
            paths.into_iter().map(Into::into).collect(),
        );
        self
    }
}

#[async_trait]
impl ExtensionGenerator for InMemoryGenerator {
    async fn generate(
        &self,
        config: &ExtensionConfig,
    ) -> Result<BTreeSet<String>, GeneratorError> {
        self.outputs
            .get(&config.module_id)
            .cloned()
            .ok_or_else(|| {
                GeneratorError::new(format!(
                    "no generated output registered for module '{}'",
                    config.module_id
                ))
            })
    }
}

/// Generator that snapshots a directory of pre-generated output.
///
/// The external generator is expected to have written each configuration's
/// output under `<root>/<module_id>/`; generating a configuration walks that
/// subtree and returns the relative paths of every file in it.
#[derive(Debug, Clone)]
pub struct DirectorySnapshotGenerator {
    root: PathBuf,
}

impl DirectorySnapshotGenerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ExtensionGenerator for DirectorySnapshotGenerator {
    async fn generate(
        &self,
        config: &ExtensionConfig,
    ) -> Result<BTreeSet<String>, GeneratorError> {
        let output_dir = self.root.join(&config.module_id);
        if !output_dir.is_dir() {
            return Err(GeneratorError::new(format!(
                "no generated output directory for module '{}' at {}",
                config.module_id,
                output_dir.display()
            )));
        }

        let paths = collect_relative_paths(&output_dir)?;
        debug!(
            module_id = config.module_id,
            files = paths.len(),
            "Collected generated output snapshot"
        );
        Ok(paths)
    }
}

/// Walk a directory tree and collect the relative paths of every file,
/// normalized to forward slashes.
fn collect_relative_paths(root: &Path) -> Result<BTreeSet<String>, GeneratorError> {
    let mut paths = BTreeSet::new();

    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            GeneratorError::new(format!("failed to walk {}: {}", root.display(), e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).map_err(|e| {
            GeneratorError::new(format!(
                "generated path {} escapes snapshot root: {}",
                entry.path().display(),
                e
            ))
        })?;

        let normalized = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        paths.insert(normalized);
    }

    Ok(paths)
}
