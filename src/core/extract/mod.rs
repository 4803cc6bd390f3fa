//! Text extraction pipeline: entity snapshots in, index documents out.

mod builder;
mod cleanup;
mod metadata;

pub use builder::{ContentTextSource, DocumentBuilder, MAX_TEXT_ASSET_BYTES};
pub use cleanup::{cleanup, collapse_spaces, strip_tags, MAX_WORD_OCCURRENCES};
pub use metadata::{MetadataExtractor, MetadataRegistry};
