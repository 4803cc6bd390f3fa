//! Index document builder.
//!
//! Converts an [`Entity`] snapshot into the [`IndexDocument`]
//! persisted to the search backend: descriptive fields copied
//! over, raw text collected per entity kind, then cleaned into
//! the indexable form. Extraction failures on individual
//! contributions (metadata entries, content text, image metadata)
//! are logged and skipped; the document is still produced with
//! the text gathered so far.

use crate::core::entity::{AssetKind, Entity, EntityKind, MetaValue, Property};
use crate::core::error::Result;
use crate::core::extract::cleanup::{cleanup, collapse_spaces, strip_tags};
use crate::core::extract::metadata::MetadataRegistry;
use crate::core::types::IndexDocument;

/// Text files above this size are excluded from the fulltext
/// index (performance guard).
pub const MAX_TEXT_ASSET_BYTES: u64 = 2_000_000;

/// External collaborator that pulls plain text out of
/// document-format assets (PDF, DOCX, ...). When no source is
/// configured, document assets are indexed without their content
/// text.
pub trait ContentTextSource: Send + Sync {
    /// Whether this source can handle the given filename
    fn supports(&self, filename: &str) -> bool;

    /// Extract the plain text content
    fn extract(&self, filename: &str) -> Result<String>;
}

/// Builds index documents from entity snapshots
pub struct DocumentBuilder {
    min_word_length: usize,
    max_word_length: usize,
    metadata_registry: MetadataRegistry,
    content_text: Option<Box<dyn ContentTextSource>>,
}

impl DocumentBuilder {
    /// Create a builder with the backend-configured word length
    /// bounds and the default metadata extractor set.
    pub fn new(min_word_length: usize, max_word_length: usize) -> Self {
        Self {
            min_word_length,
            max_word_length,
            metadata_registry: MetadataRegistry::with_defaults(),
            content_text: None,
        }
    }

    /// Replace the metadata extractor registry
    pub fn with_metadata_registry(mut self, registry: MetadataRegistry) -> Self {
        self.metadata_registry = registry;
        self
    }

    /// Attach a content text source for document-format assets
    pub fn with_content_text_source(mut self, source: Box<dyn ContentTextSource>) -> Self {
        self.content_text = Some(source);
        self
    }

    /// Build the index document for an entity.
    ///
    /// The cleaned text is always derived fresh from the raw body;
    /// re-building for the same entity replaces the previous
    /// record, never appends to it.
    pub fn build(&self, entity: &Entity) -> IndexDocument {
        let mut doc = IndexDocument::empty();
        doc.id = Some(entity.document_id());
        doc.key = entity.key.clone();
        doc.full_path = entity.full_path.clone();
        doc.sub_type = entity.kind.sub_type();
        doc.creation_date = entity.creation_date;
        doc.modification_date = entity.modification_date;
        doc.user_owner = entity.user_owner;
        doc.user_modification = entity.user_modification;
        doc.properties = flatten_properties(&entity.properties);

        let mut body = entity.key.clone();

        doc.published = match &entity.kind {
            EntityKind::DocumentFolder | EntityKind::ObjectFolder => true,

            EntityKind::Link { href, published } => {
                body = format!(" {href}");
                *published
            }

            EntityKind::Snippet {
                editables,
                published,
            } => {
                self.append_editables(&mut body, editables);
                *published
            }

            EntityKind::Page {
                editables,
                title,
                description,
                pretty_url,
                published,
            } => {
                self.append_editables(&mut body, editables);
                body.push(' ');
                body.push_str(title);
                body.push(' ');
                body.push_str(description);
                body.push(' ');
                body.push_str(pretty_url.as_deref().unwrap_or(""));
                *published
            }

            EntityKind::Asset { asset, metadata } => {
                self.append_asset_metadata(&mut body, metadata);
                self.append_asset_content(&mut body, asset);
                // assets carry no publish workflow
                true
            }

            EntityKind::Object {
                fields, published, ..
            } => {
                // inherited-value resolution is forced on for the
                // duration of extraction, as a parameter rather
                // than a process-wide toggle
                for field in fields {
                    if let Some(text) = field.search_text(true) {
                        body.push(' ');
                        body.push_str(text);
                    }
                }
                *published
            }

            EntityKind::Unknown {
                main_type,
                type_name,
            } => {
                tracing::error!(
                    "document builder received an unknown element: {} ({})",
                    type_name,
                    main_type
                );
                false
            }
        };

        // @ is reserved for the backend's proximity operator
        let mut body = body.replace('@', "#");

        body.push(' ');
        body.push_str(&path_words(&entity.full_path));

        let header = format!("ID: {}  \nPath: {}  \n", entity.id, entity.full_path);
        doc.cleaned_text = format!(
            "{header}{}",
            cleanup(&body, self.min_word_length, self.max_word_length)
        );
        doc.raw_text = format!("{header}{body}");

        doc
    }

    /// Append rendered editable content, stripped of markup.
    /// Container editables are skipped: their inner editables show
    /// up in the sequence on their own.
    fn append_editables(&self, body: &mut String, editables: &[crate::core::entity::Editable]) {
        for editable in editables {
            if editable.kind.is_container() {
                continue;
            }
            body.push_str(&strip_tags(&editable.rendered));
            body.push(' ');
        }
    }

    /// Append search text from typed asset metadata entries.
    /// Unsupported types are logged and skipped.
    fn append_asset_metadata(
        &self,
        body: &mut String,
        metadata: &[crate::core::entity::MetadataEntry],
    ) {
        for entry in metadata {
            match self.metadata_registry.build(&entry.data_type) {
                Ok(extractor) => {
                    if let Some(text) = extractor.data_for_search_index(entry) {
                        body.push(' ');
                        body.push_str(&text);
                    }
                }
                Err(_) => {
                    tracing::error!(
                        "asset metadata type {} could not be resolved",
                        entry.data_type
                    );
                }
            }
        }
    }

    /// Append kind-specific asset content: extracted document
    /// text, inline text data, or flattened image metadata.
    fn append_asset_content(&self, body: &mut String, asset: &AssetKind) {
        match asset {
            AssetKind::Document { filename } => {
                let Some(source) = self.content_text.as_deref() else {
                    return;
                };
                if !source.supports(filename) {
                    return;
                }
                match source.extract(filename) {
                    Ok(content) => {
                        if !content.is_empty() {
                            let normalized: String = content
                                .chars()
                                .map(|c| match c {
                                    '\r' | '\n' | '\t' | '\x0c' => ' ',
                                    other => other,
                                })
                                .collect();
                            body.push(' ');
                            body.push_str(&collapse_spaces(&normalized));
                        }
                    }
                    Err(e) => {
                        tracing::error!("content text extraction failed for {filename}: {e}");
                    }
                }
            }

            AssetKind::Text { data, file_size } => {
                // oversized text files are silently excluded
                if *file_size < MAX_TEXT_ASSET_BYTES {
                    body.push(' ');
                    body.push_str(&String::from_utf8_lossy(data));
                }
            }

            AssetKind::Image { exif, iptc } => {
                for (key, value) in exif.iter().chain(iptc.iter()) {
                    body.push(' ');
                    body.push_str(key);
                    body.push_str(" : ");
                    match value {
                        MetaValue::Text(text) => body.push_str(text),
                        MetaValue::List(items) => body.push_str(&items.join(" - ")),
                    }
                }
            }

            AssetKind::Folder | AssetKind::Other { .. } => {}
        }
    }
}

/// Flatten properties into `name:value` pairs separated by spaces
fn flatten_properties(properties: &[Property]) -> String {
    let mut flattened = String::new();
    for property in properties {
        flattened.push_str(&property.name);
        flattened.push(':');
        flattened.push_str(&property.data.as_search_text());
        flattened.push(' ');
    }
    flattened
}

/// Path tokens: separators and punctuation become spaces so path
/// segments are individually searchable.
fn path_words(full_path: &str) -> String {
    full_path
        .chars()
        .map(|c| match c {
            '-' | '_' | '/' | '.' | '(' | ')' => ' ',
            other => other,
        })
        .collect()
}
