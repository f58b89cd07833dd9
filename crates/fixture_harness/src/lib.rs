//! Verification harness for extension fixture registries.
//!
//! This library evaluates a [`fixture_registry::FixtureRegistry`] against two
//! external collaborators: a generator that renders an extension
//! configuration into output files, and a template store that serves raw
//! template content. Each record is checked independently, failures
//! accumulate into a report, and no single failure aborts a run.

pub mod errors;
pub mod generator;
pub mod report;
pub mod runner;
pub mod template_store;

// Re-export commonly used types for convenience
pub use errors::Error;
pub use generator::{
    DirectorySnapshotGenerator, ExtensionGenerator, GeneratorError, InMemoryGenerator,
};
pub use runner::{CheckOutcome, FixtureReport, FixtureRunner};
pub use template_store::{
    FilesystemTemplateStore, InMemoryTemplateStore, TemplateStore, TemplateStoreError,
};
