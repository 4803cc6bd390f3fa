//! Storage layer for the fulltext backend.
//!
//! The [`SearchBackend`] trait is the persistence seam the saver
//! and the CLI work against; [`TantivyBackend`] is the embedded
//! Tantivy implementation. Saving is always replace-by-id - one
//! record per composite entity id, re-extraction replaces.

mod tantivy;

pub use self::tantivy::{create_schema, TantivyBackend, SCHEMA_VERSION};

use crate::core::error::Result;
use crate::core::types::{DocumentId, IndexDocument};

/// Persistence backend for index documents.
///
/// Implementations provide the write/lookup/delete primitives;
/// retry-on-contention policy lives above this seam, in the
/// document saver.
pub trait SearchBackend {
    /// Persist one document, replacing any record with the same id
    fn save(&mut self, document: &IndexDocument) -> Result<()>;

    /// Look up the stored record for an entity reference
    fn get_for_element(&self, id: &DocumentId) -> Result<Option<IndexDocument>>;

    /// Remove the record for an entity reference
    fn delete(&mut self, id: &DocumentId) -> Result<()>;
}

impl SearchBackend for TantivyBackend {
    fn save(&mut self, document: &IndexDocument) -> Result<()> {
        self.save_document(document)
    }

    fn get_for_element(&self, id: &DocumentId) -> Result<Option<IndexDocument>> {
        self.get_document(id)
    }

    fn delete(&mut self, id: &DocumentId) -> Result<()> {
        self.delete_document(id)
    }
}
