//! Fixture registry for extension module verification.
//!
//! This crate defines the immutable data model that describes how a pluggable
//! extension module is expected to behave when rendered by an external
//! generator: generation scenarios (input configuration paired with the output
//! files the generator must produce) and template validations (content
//! fragments that must appear in a named template resource).
//!
//! Registries are fully constructed at load time, either from constructor
//! functions or from a serialized TOML document, and are validated against the
//! registry invariants before use. There is no mutation lifecycle and no
//! process-wide state; loaders return a value.

pub mod descriptor;
pub mod errors;
pub mod extension_config;
pub mod registry;
pub mod scenario;
pub mod template_validation;

// Re-export for convenient access
pub use descriptor::ModuleDescriptor;
pub use errors::{RegistryError, RegistryResult};
pub use extension_config::{ExtensionConfig, ExtensionKind, FieldValues, GithubFieldValues};
pub use registry::FixtureRegistry;
pub use scenario::Scenario;
pub use template_validation::TemplateValidation;
