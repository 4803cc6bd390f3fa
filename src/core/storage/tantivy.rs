//! Tantivy integration for the fulltext backend.
//!
//! Wraps Tantivy operations for creating, opening and mutating
//! the index that holds one record per content entity. Writes are
//! replace-by-id: saving deletes any previous record with the
//! same composite id before adding the new one.

use crate::core::error::{Result, SeekbaseError};
use crate::core::types::{DocumentId, IndexDocument, MainType};
use std::path::Path;
use tantivy::collector::TopDocs;
use tantivy::query::TermQuery;
use tantivy::schema::*;
use tantivy::{doc, Index, IndexReader, IndexWriter, TantivyDocument, Term};

/// Current schema version
/// Version 1: Initial schema
/// Version 2: raw_text stored alongside cleaned_text
pub const SCHEMA_VERSION: u32 = 2;

/// Marker file recording the schema version of an index directory
const SCHEMA_VERSION_FILE: &str = "schema_version";

/// Create the Tantivy schema for index documents
///
/// Fields:
/// - id: composite `{main_type}_{id}` term key (STRING | STORED)
/// - element_id: numeric entity id (i64 | STORED)
/// - main_type / sub_type: entity categories (STRING | STORED)
/// - key / full_path: display fields (STRING | STORED)
/// - published: visibility flag (bool, INDEXED | STORED)
/// - creation_date / modification_date: epoch seconds (STORED)
/// - user_owner / user_modification: user ids (STORED)
/// - cleaned_text: searchable fulltext (TEXT | STORED)
/// - raw_text: pre-cleanup text (STORED only)
/// - properties: flattened name:value pairs (TEXT | STORED)
pub fn create_schema() -> Schema {
    let mut builder = Schema::builder();

    builder.add_text_field("id", STRING | STORED);
    builder.add_i64_field("element_id", STORED);
    builder.add_text_field("main_type", STRING | STORED);
    builder.add_text_field("sub_type", STRING | STORED);
    builder.add_text_field("key", STRING | STORED);
    builder.add_text_field("full_path", STRING | STORED);
    builder.add_bool_field("published", INDEXED | STORED);
    builder.add_i64_field("creation_date", STORED);
    builder.add_i64_field("modification_date", STORED);
    builder.add_i64_field("user_owner", STORED);
    builder.add_i64_field("user_modification", STORED);
    builder.add_text_field("cleaned_text", TEXT | STORED);
    builder.add_text_field("raw_text", TextOptions::default().set_stored());
    builder.add_text_field("properties", TEXT | STORED);

    builder.build()
}

/// Verify the schema version marker of an existing index directory
fn check_schema_version(index_dir: &Path) -> Result<()> {
    let marker = index_dir.join(SCHEMA_VERSION_FILE);
    let contents = std::fs::read_to_string(&marker).map_err(|e| {
        SeekbaseError::StorageError(format!(
            "Missing schema version marker in {}: {e}",
            index_dir.display()
        ))
    })?;

    let found: u32 = contents.trim().parse().map_err(|_| {
        SeekbaseError::StorageError(format!("Invalid schema version marker: {contents:?}"))
    })?;

    if found != SCHEMA_VERSION {
        return Err(SeekbaseError::StorageError(format!(
            "Index schema version {found} does not match expected {SCHEMA_VERSION}, rebuild the index"
        )));
    }

    Ok(())
}

/// Tantivy-backed search index for index documents
pub struct TantivyBackend {
    index: Index,
    schema: Schema,
    writer: IndexWriter,
}

impl std::fmt::Debug for TantivyBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TantivyBackend")
            .field("schema", &"<schema>")
            .finish()
    }
}

impl TantivyBackend {
    /// Create a new index at the given path
    pub fn create(index_dir: &Path) -> Result<Self> {
        let schema = create_schema();

        std::fs::create_dir_all(index_dir)?;

        let index = Index::create_in_dir(index_dir, schema.clone())
            .map_err(|e| SeekbaseError::StorageError(format!("Failed to create index: {e}")))?;

        std::fs::write(
            index_dir.join(SCHEMA_VERSION_FILE),
            SCHEMA_VERSION.to_string(),
        )?;

        // 50MB writer heap
        let writer = index
            .writer(50_000_000)
            .map_err(|e| SeekbaseError::StorageError(format!("Failed to create writer: {e}")))?;

        Ok(Self {
            index,
            schema,
            writer,
        })
    }

    /// Open an existing index
    ///
    /// Fails when the directory was written with a different schema
    /// version; such an index must be rebuilt.
    pub fn open(index_dir: &Path) -> Result<Self> {
        check_schema_version(index_dir)?;

        let index = Index::open_in_dir(index_dir)
            .map_err(|e| SeekbaseError::StorageError(format!("Failed to open index: {e}")))?;

        let schema = index.schema();

        let writer = index
            .writer(50_000_000)
            .map_err(|e| SeekbaseError::StorageError(format!("Failed to create writer: {e}")))?;

        Ok(Self {
            index,
            schema,
            writer,
        })
    }

    /// Open the index, creating it first if the directory holds
    /// no index yet
    pub fn open_or_create(index_dir: &Path) -> Result<Self> {
        if index_dir.join("meta.json").exists() {
            Self::open(index_dir)
        } else {
            Self::create(index_dir)
        }
    }

    fn field(&self, name: &str) -> Result<Field> {
        self.schema
            .get_field(name)
            .map_err(|e| SeekbaseError::StorageError(format!("Missing {name} field: {e}")))
    }

    /// Write one index document, replacing any previous record
    /// with the same composite id, and commit.
    pub fn save_document(&mut self, document: &IndexDocument) -> Result<()> {
        let id = document.id.ok_or(SeekbaseError::MissingDocumentId)?;

        let id_field = self.field("id")?;
        let element_id_field = self.field("element_id")?;
        let main_type_field = self.field("main_type")?;
        let sub_type_field = self.field("sub_type")?;
        let key_field = self.field("key")?;
        let full_path_field = self.field("full_path")?;
        let published_field = self.field("published")?;
        let creation_date_field = self.field("creation_date")?;
        let modification_date_field = self.field("modification_date")?;
        let user_owner_field = self.field("user_owner")?;
        let user_modification_field = self.field("user_modification")?;
        let cleaned_text_field = self.field("cleaned_text")?;
        let raw_text_field = self.field("raw_text")?;
        let properties_field = self.field("properties")?;

        // replace, never append
        self.writer
            .delete_term(Term::from_field_text(id_field, &id.to_string()));

        let mut record = doc!(
            id_field => id.to_string(),
            element_id_field => id.id as i64,
            main_type_field => id.main_type.as_str(),
            sub_type_field => document.sub_type.as_str(),
            key_field => document.key.as_str(),
            full_path_field => document.full_path.as_str(),
            published_field => document.published,
            creation_date_field => document.creation_date,
            modification_date_field => document.modification_date,
            user_owner_field => document.user_owner as i64,
            cleaned_text_field => document.cleaned_text.as_str(),
            raw_text_field => document.raw_text.as_str(),
            properties_field => document.properties.as_str(),
        );
        if let Some(user) = document.user_modification {
            record.add_i64(user_modification_field, user as i64);
        }

        self.writer
            .add_document(record)
            .map_err(|e| SeekbaseError::StorageError(format!("Failed to add document: {e}")))?;

        self.commit()
    }

    /// Look up the stored record for an entity reference
    pub fn get_document(&self, id: &DocumentId) -> Result<Option<IndexDocument>> {
        let id_field = self.field("id")?;

        let searcher = self.reader()?.searcher();
        let query = TermQuery::new(
            Term::from_field_text(id_field, &id.to_string()),
            IndexRecordOption::Basic,
        );

        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(1))
            .map_err(|e| SeekbaseError::StorageError(format!("Lookup failed: {e}")))?;

        let Some((_score, address)) = top_docs.into_iter().next() else {
            return Ok(None);
        };

        let stored: TantivyDocument = searcher
            .doc(address)
            .map_err(|e| SeekbaseError::StorageError(format!("Failed to retrieve document: {e}")))?;

        Ok(Some(self.decode_document(&stored)?))
    }

    /// Remove the record for an entity reference and commit
    pub fn delete_document(&mut self, id: &DocumentId) -> Result<()> {
        let id_field = self.field("id")?;
        self.writer
            .delete_term(Term::from_field_text(id_field, &id.to_string()));
        self.commit()
    }

    /// Commit changes to disk
    pub fn commit(&mut self) -> Result<()> {
        self.writer
            .commit()
            .map_err(|e| SeekbaseError::StorageError(format!("Failed to commit: {e}")))?;
        Ok(())
    }

    /// Get an index reader for searching
    pub fn reader(&self) -> Result<IndexReader> {
        self.index
            .reader()
            .map_err(|e| SeekbaseError::StorageError(format!("Failed to create reader: {e}")))
    }

    /// Get the schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Get a reference to the underlying Tantivy index
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Rebuild an [`IndexDocument`] from its stored fields
    pub(crate) fn decode_document(&self, stored: &TantivyDocument) -> Result<IndexDocument> {
        let main_type_str = extract_text(stored, self.field("main_type")?);
        let main_type = main_type_str
            .parse::<MainType>()
            .map_err(|_| SeekbaseError::StorageError(format!("Bad main_type: {main_type_str}")))?;
        let element_id = extract_i64(stored, self.field("element_id")?) as u64;

        Ok(IndexDocument {
            id: Some(DocumentId::new(main_type, element_id)),
            key: extract_text(stored, self.field("key")?),
            full_path: extract_text(stored, self.field("full_path")?),
            sub_type: extract_text(stored, self.field("sub_type")?),
            published: extract_bool(stored, self.field("published")?),
            creation_date: extract_i64(stored, self.field("creation_date")?),
            modification_date: extract_i64(stored, self.field("modification_date")?),
            user_owner: extract_i64(stored, self.field("user_owner")?) as u64,
            user_modification: stored
                .get_first(self.field("user_modification")?)
                .and_then(|v| v.as_i64())
                .map(|v| v as u64),
            raw_text: extract_text(stored, self.field("raw_text")?),
            cleaned_text: extract_text(stored, self.field("cleaned_text")?),
            properties: extract_text(stored, self.field("properties")?),
        })
    }
}

/// Extract text field from a stored document
pub(crate) fn extract_text(doc: &TantivyDocument, field: Field) -> String {
    doc.get_first(field)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Extract i64 field from a stored document
pub(crate) fn extract_i64(doc: &TantivyDocument, field: Field) -> i64 {
    doc.get_first(field).and_then(|v| v.as_i64()).unwrap_or(0)
}

/// Extract bool field from a stored document
pub(crate) fn extract_bool(doc: &TantivyDocument, field: Field) -> bool {
    doc.get_first(field)
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}
