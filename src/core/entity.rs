//! Entity snapshot model.
//!
//! Entities are content items (documents, assets, structured
//! objects) exported from the host content tree. seekbase never
//! talks to the host ORM directly: an [`Entity`] is a
//! self-contained snapshot carrying everything the extractor
//! needs - identity, path, timestamps, properties, and a tagged
//! kind variant with the kind-specific payload.
//!
//! All types here are serde-(de)serializable so snapshots can be
//! exchanged as JSON files.

use crate::core::types::{DocumentId, MainType};
use serde::{Deserialize, Serialize};

/// A typed name/value annotation attached to an entity,
/// optionally inherited from an ancestor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub data: PropertyValue,
    /// Whether this property was resolved from an ancestor
    #[serde(default)]
    pub inherited: bool,
}

/// Property payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PropertyValue {
    Text(String),
    Bool(bool),
    Number(f64),
    Date(i64),
    /// Reference to another entity, stored by id
    Element {
        main_type: MainType,
        id: u64,
    },
}

impl PropertyValue {
    /// String form used when flattening properties into the index
    /// document. Booleans render as `true`/`false`.
    pub fn as_search_text(&self) -> String {
        match self {
            PropertyValue::Text(s) => s.clone(),
            PropertyValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            PropertyValue::Number(n) => n.to_string(),
            PropertyValue::Date(ts) => ts.to_string(),
            PropertyValue::Element { id, .. } => id.to_string(),
        }
    }
}

/// A named content slot within a document, already rendered by
/// the host system to its display output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Editable {
    pub name: String,
    pub kind: EditableKind,
    /// Rendered frontend output (may contain markup)
    #[serde(default)]
    pub rendered: String,
}

/// Editable kinds known to the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditableKind {
    Input,
    Textarea,
    Wysiwyg,
    Select,
    Date,
    Link,
    Image,
    Video,
    Block,
    Area,
    Areablock,
}

impl EditableKind {
    /// Container kinds expand into further editables which show up
    /// in the sequence on their own; indexing the container too
    /// would double-count their content.
    pub fn is_container(&self) -> bool {
        matches!(self, EditableKind::Area | EditableKind::Areablock)
    }
}

/// One metadata entry on an asset. The `data_type` selects the
/// extractor used to turn `data` into search text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub name: String,
    pub data_type: String,
    #[serde(default)]
    pub data: String,
}

/// EXIF/IPTC value: either a scalar or a list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

/// Ordered key/value pairs from an image's embedded metadata
pub type MetaPairs = Vec<(String, MetaValue)>;

/// One field on a structured object's schema, with the values the
/// host resolved for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectField {
    pub name: String,
    /// Value set directly on the object
    #[serde(default)]
    pub value: Option<String>,
    /// Value an ancestor would contribute if inheritance applies
    #[serde(default)]
    pub inherited_value: Option<String>,
}

impl ObjectField {
    /// Search-index text contribution of this field.
    ///
    /// Inherited-value resolution is an explicit parameter rather
    /// than process-wide state, so concurrent extractions can use
    /// different settings.
    pub fn search_text(&self, resolve_inherited: bool) -> Option<&str> {
        match (self.value.as_deref(), resolve_inherited) {
            (Some(v), _) => Some(v),
            (None, true) => self.inherited_value.as_deref(),
            (None, false) => None,
        }
    }
}

/// Concrete asset variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "asset_type", rename_all = "lowercase")]
pub enum AssetKind {
    Folder,
    /// A document-format file (PDF, DOCX, ...) whose text is
    /// pulled through an external content-text collaborator
    Document { filename: String },
    /// A plain text file, carried inline
    Text {
        #[serde(default)]
        data: Vec<u8>,
        file_size: u64,
    },
    /// An image with embedded EXIF/IPTC metadata
    Image {
        #[serde(default)]
        exif: MetaPairs,
        #[serde(default)]
        iptc: MetaPairs,
    },
    /// Any other asset type (video, archive, ...)
    Other { type_name: String },
}

impl AssetKind {
    pub fn type_name(&self) -> &str {
        match self {
            AssetKind::Folder => "folder",
            AssetKind::Document { .. } => "document",
            AssetKind::Text { .. } => "text",
            AssetKind::Image { .. } => "image",
            AssetKind::Other { type_name } => type_name,
        }
    }
}

/// Tagged entity variant, flattened into the snapshot JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    DocumentFolder,
    Link {
        href: String,
        published: bool,
    },
    Snippet {
        #[serde(default)]
        editables: Vec<Editable>,
        published: bool,
    },
    Page {
        #[serde(default)]
        editables: Vec<Editable>,
        #[serde(default)]
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        pretty_url: Option<String>,
        published: bool,
    },
    Asset {
        #[serde(flatten)]
        asset: AssetKind,
        #[serde(default)]
        metadata: Vec<MetadataEntry>,
    },
    Object {
        class_name: String,
        #[serde(default)]
        fields: Vec<ObjectField>,
        published: bool,
    },
    ObjectFolder,
    /// An element the extractor does not recognize. The tree
    /// branch it came from is still known.
    Unknown {
        main_type: MainType,
        type_name: String,
    },
}

impl EntityKind {
    /// Top-level category this kind belongs to
    pub fn main_type(&self) -> MainType {
        match self {
            EntityKind::DocumentFolder
            | EntityKind::Link { .. }
            | EntityKind::Snippet { .. }
            | EntityKind::Page { .. } => MainType::Document,
            EntityKind::Asset { .. } => MainType::Asset,
            EntityKind::Object { .. } | EntityKind::ObjectFolder => MainType::Object,
            EntityKind::Unknown { main_type, .. } => *main_type,
        }
    }

    /// Concrete subtype string, or the class name for objects
    pub fn sub_type(&self) -> String {
        match self {
            EntityKind::DocumentFolder | EntityKind::ObjectFolder => "folder".to_string(),
            EntityKind::Link { .. } => "link".to_string(),
            EntityKind::Snippet { .. } => "snippet".to_string(),
            EntityKind::Page { .. } => "page".to_string(),
            EntityKind::Asset { asset, .. } => asset.type_name().to_string(),
            EntityKind::Object { class_name, .. } => class_name.clone(),
            EntityKind::Unknown { type_name, .. } => type_name.clone(),
        }
    }
}

/// A content entity snapshot: the accessor capability set the
/// extractor consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u64,
    pub key: String,
    pub full_path: String,
    pub creation_date: i64,
    pub modification_date: i64,
    pub user_owner: u64,
    #[serde(default)]
    pub user_modification: Option<u64>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(flatten)]
    pub kind: EntityKind,
}

impl Entity {
    /// Composite backend identifier of this entity
    pub fn document_id(&self) -> DocumentId {
        DocumentId::new(self.kind.main_type(), self.id)
    }
}
