use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::{ContentDomain, ContentRecord};
use crate::error::ContentError;

/// Source of raw content documents.
/// Platform-specific implementations should provide this.
pub trait ContentSource {
    /// Fetch the document for `domain` as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read.
    fn fetch(&self, domain: ContentDomain) -> Result<String, ContentError>;
}

/// Reads `<root>/data/<domain>.json` from disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn document_path(&self, domain: ContentDomain) -> PathBuf {
        self.root.join(domain.document_path())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirectorySource {
    fn fetch(&self, domain: ContentDomain) -> Result<String, ContentError> {
        Ok(std::fs::read_to_string(self.document_path(domain))?)
    }
}

/// In-memory documents (embedded bundles and tests).
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: BTreeMap<ContentDomain, String>,
}

impl StaticSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, domain: ContentDomain, document: impl Into<String>) -> Self {
        self.documents.insert(domain, document.into());
        self
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self, domain: ContentDomain) -> Result<String, ContentError> {
        self.documents
            .get(&domain)
            .cloned()
            .ok_or_else(|| ContentError::Fetch(format!("no document for {domain}")))
    }
}

/// Parse a domain document into records, preserving document order.
///
/// # Errors
///
/// Returns an error if the text is not JSON, is not an array, or a record does
/// not match the domain's shape.
pub fn parse_records<T: ContentRecord>(text: &str) -> Result<Vec<T>, ContentError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(ContentError::NotAnArray(T::DOMAIN));
    }
    Ok(serde_json::from_value(value)?)
}

/// Collapse a failed load into an empty collection, logging the cause.
#[must_use]
pub fn records_or_empty<T: ContentRecord>(result: Result<Vec<T>, ContentError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        log::error!("Error loading {}: {err}", T::DOMAIN);
        Vec::new()
    })
}

/// Fetch and parse a domain. Any failure yields an empty collection.
#[must_use]
pub fn load<T: ContentRecord>(source: &impl ContentSource) -> Vec<T> {
    records_or_empty(
        source
            .fetch(T::DOMAIN)
            .and_then(|text| parse_records::<T>(&text)),
    )
}
