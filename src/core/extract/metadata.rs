//! Asset metadata extractors.
//!
//! Asset metadata entries are typed, and each type contributes
//! its search text differently. The registry resolves a type name
//! to an extractor; unknown types fail with
//! [`SeekbaseError::UnsupportedMetadataType`], which the document
//! builder logs and skips without aborting extraction.

use crate::core::entity::MetadataEntry;
use crate::core::error::{Result, SeekbaseError};
use std::collections::HashMap;

/// Turns one metadata entry into its search-index contribution.
///
/// `None` means the entry has nothing to contribute (for example
/// an empty value); it is not an error.
pub trait MetadataExtractor: Send + Sync + std::fmt::Debug {
    fn data_for_search_index(&self, entry: &MetadataEntry) -> Option<String>;
}

/// Plain text metadata (input, textarea, select)
#[derive(Debug)]
struct TextMetadata;

impl MetadataExtractor for TextMetadata {
    fn data_for_search_index(&self, entry: &MetadataEntry) -> Option<String> {
        let trimmed = entry.data.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Checkbox metadata, rendered as `true`/`false`
#[derive(Debug)]
struct CheckboxMetadata;

impl MetadataExtractor for CheckboxMetadata {
    fn data_for_search_index(&self, entry: &MetadataEntry) -> Option<String> {
        let truthy = matches!(entry.data.trim(), "1" | "true" | "on");
        Some(if truthy { "true" } else { "false" }.to_string())
    }
}

/// Date metadata, indexed as the raw timestamp string
#[derive(Debug)]
struct DateMetadata;

impl MetadataExtractor for DateMetadata {
    fn data_for_search_index(&self, entry: &MetadataEntry) -> Option<String> {
        let trimmed = entry.data.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Registry of metadata extractors keyed by type name
pub struct MetadataRegistry {
    extractors: HashMap<String, Box<dyn MetadataExtractor>>,
}

impl MetadataRegistry {
    /// Empty registry with no extractors
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Registry with the built-in extractor set
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("input", Box::new(TextMetadata));
        registry.register("textarea", Box::new(TextMetadata));
        registry.register("select", Box::new(TextMetadata));
        registry.register("checkbox", Box::new(CheckboxMetadata));
        registry.register("date", Box::new(DateMetadata));
        registry
    }

    /// Register (or replace) an extractor for a type name
    pub fn register(&mut self, type_name: &str, extractor: Box<dyn MetadataExtractor>) {
        self.extractors.insert(type_name.to_string(), extractor);
    }

    /// Resolve the extractor for a metadata type
    pub fn build(&self, type_name: &str) -> Result<&dyn MetadataExtractor> {
        self.extractors
            .get(type_name)
            .map(|e| e.as_ref())
            .ok_or_else(|| SeekbaseError::UnsupportedMetadataType(type_name.to_string()))
    }
}

impl Default for MetadataRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
