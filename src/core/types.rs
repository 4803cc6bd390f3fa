//! Core data types for the seekbase service.
//!
//! This module defines the index document record that gets
//! persisted to the search backend, its composite identifier,
//! and the search result types returned by queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level entity category within the content tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainType {
    Document,
    Asset,
    Object,
}

impl MainType {
    /// Stable string form used in backend fields and composite ids
    pub fn as_str(&self) -> &'static str {
        match self {
            MainType::Document => "document",
            MainType::Asset => "asset",
            MainType::Object => "object",
        }
    }
}

impl fmt::Display for MainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MainType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "document" => Ok(MainType::Document),
            "asset" => Ok(MainType::Asset),
            "object" => Ok(MainType::Object),
            other => Err(format!("unknown main type: {other}")),
        }
    }
}

/// Composite identifier of an index document.
///
/// Entity ids are only unique per main type (a document and an
/// asset can both have id 5), so the backend key combines both.
/// Immutable once assigned to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId {
    pub main_type: MainType,
    pub id: u64,
}

impl DocumentId {
    pub fn new(main_type: MainType, id: u64) -> Self {
        Self { main_type, id }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.main_type, self.id)
    }
}

/// The denormalized record handed to the search backend.
///
/// Created or replaced whenever the originating entity is saved,
/// moved or republished; deleted when the entity is deleted. The
/// id uniquely determines one record: re-extraction replaces,
/// never appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDocument {
    /// Composite identifier; must be set before saving
    pub id: Option<DocumentId>,

    /// Display name of the entity
    pub key: String,

    /// Hierarchical path string (real full path)
    pub full_path: String,

    /// Concrete subtype, or the class name for objects
    pub sub_type: String,

    /// Visibility flag of the originating entity
    pub published: bool,

    /// Epoch timestamp, source-of-truth is the entity
    pub creation_date: i64,

    /// Epoch timestamp, source-of-truth is the entity
    pub modification_date: i64,

    /// User id of the owner
    pub user_owner: u64,

    /// User id of the last modifier, if known
    pub user_modification: Option<u64>,

    /// Accumulated extracted text before cleanup
    pub raw_text: String,

    /// Tokenized/filtered text used for indexing. Derived fresh
    /// from the raw body on every rebuild, never patched in place.
    pub cleaned_text: String,

    /// Flattened `name:value` pairs from entity properties
    pub properties: String,
}

impl IndexDocument {
    /// An empty document shell; the builder fills it in
    pub fn empty() -> Self {
        Self {
            id: None,
            key: String::new(),
            full_path: String::new(),
            sub_type: String::new(),
            published: false,
            creation_date: 0,
            modification_date: 0,
            user_owner: 0,
            user_modification: None,
            raw_text: String::new(),
            cleaned_text: String::new(),
            properties: String::new(),
        }
    }
}

/// Search result returned by a fulltext query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// BM25 relevance score (higher = more relevant)
    pub score: f32,

    /// Composite id string, e.g. `document_12`
    pub document_id: String,

    /// Display name
    pub key: String,

    /// Hierarchical path
    pub full_path: String,

    /// document | asset | object
    pub main_type: String,

    /// Concrete subtype or class name
    pub sub_type: String,

    /// Visibility flag
    pub published: bool,
}

/// Response from a fulltext query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Matching documents
    pub hits: Vec<SearchHit>,

    /// Number of hits returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// Statistics from a bulk build-and-save run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of entities turned into index documents
    pub documents_saved: usize,

    /// Number of snapshot files skipped due to errors
    pub snapshots_skipped: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}
