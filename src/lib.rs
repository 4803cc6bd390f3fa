//! Seekbase - Fulltext Index Builder for CMS Entities
//!
//! Turns CMS entity snapshots (documents, assets, data objects) into
//! denormalized index documents and persists them into a BM25
//! fulltext index via Tantivy.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (interface-agnostic)
//!   - config, error, types, xdg
//!   - entity (snapshot model)
//!   - extract (cleanup, metadata, document building)
//!   - storage (Tantivy persistence)
//!   - persist (save pipeline with retry)
//!   - search (BM25 queries)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - build, search, show, delete, config commands
//!
//! # Key Features
//!
//! - Tag stripping and entity decoding for rendered markup
//! - Word length bounds and per-word occurrence capping
//! - Replace-by-id persistence with randomized retry backoff
//! - BM25 search via Tantivy (no vector embeddings)

// Core domain logic (interface-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::entity::{Entity, EntityKind};
pub use crate::core::error::{Result, SeekbaseError};
pub use crate::core::extract::DocumentBuilder;
pub use crate::core::persist::DocumentSaver;
pub use crate::core::storage::TantivyBackend;
pub use crate::core::types::*;
