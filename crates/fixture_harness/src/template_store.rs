//! Template store collaborator seam.
//!
//! Template validations assert against the raw template source, not rendered
//! output, so the store serves file content by path string without any
//! templating involved.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
#[path = "template_store_tests.rs"]
mod tests;

/// Errors raised while loading template content.
#[derive(Error, Debug)]
pub enum TemplateStoreError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to read template {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Provider of raw template content by path string.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn read_template(&self, template: &str) -> Result<String, TemplateStoreError>;
}

/// Template store backed by a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    root: PathBuf,
}

impl FilesystemTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TemplateStore for FilesystemTemplateStore {
    async fn read_template(&self, template: &str) -> Result<String, TemplateStoreError> {
        let path = self.root.join(template);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => TemplateStoreError::NotFound(template.to_string()),
                _ => TemplateStoreError::Io {
                    path: template.to_string(),
                    source: e,
                },
            })
    }
}

/// Template store backed by an in-memory map, for tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTemplateStore {
    templates: HashMap<String, String>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register template content under a path.
    pub fn with_template(
        mut self,
        template: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.templates.insert(template.into(), content.into());
        self
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn read_template(&self, template: &str) -> Result<String, TemplateStoreError> {
        self.templates
            .get(template)
            .cloned()
            .ok_or_else(|| TemplateStoreError::NotFound(template.to_string()))
    }
}
