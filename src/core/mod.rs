//! Core functionality for the seekbase fulltext index builder.

pub mod config;
pub mod entity;
pub mod error;
pub mod extract;
pub mod persist;
pub mod search;
pub mod snapshot;
pub mod storage;
pub mod types;
pub mod xdg;

pub use config::Config;
pub use entity::{Entity, EntityKind};
pub use error::{Result, SeekbaseError};
pub use extract::DocumentBuilder;
pub use persist::{DocumentSaver, RetryPolicy};
pub use search::SearchService;
pub use storage::{SearchBackend, TantivyBackend};
pub use types::{BuildStats, DocumentId, IndexDocument, MainType, SearchHit, SearchResponse};
