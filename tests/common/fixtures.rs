// Test fixtures for integration testing

use seekbase::core::entity::{Editable, EditableKind, Entity, EntityKind};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of entity snapshot JSON files
pub struct SnapshotDir {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl SnapshotDir {
    /// Create with custom snapshot files (relative path, JSON body)
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Create a small snapshot set (three entity kinds)
    #[allow(dead_code)]
    pub fn small() -> Self {
        Self::with_files(&[
            (
                "page_12.json",
                r#"{
                    "id": 12,
                    "key": "launch",
                    "full_path": "/news/launch",
                    "creation_date": 1700000000,
                    "modification_date": 1700003600,
                    "user_owner": 2,
                    "kind": "page",
                    "title": "Product Launch",
                    "description": "Announcing the new release",
                    "published": true,
                    "editables": [
                        {"name": "body", "kind": "wysiwyg",
                         "rendered": "<p>The flagship arrives this spring</p>"}
                    ]
                }"#,
            ),
            (
                "asset_3.json",
                r#"{
                    "id": 3,
                    "key": "photo.jpg",
                    "full_path": "/gallery/photo.jpg",
                    "creation_date": 1690000000,
                    "modification_date": 1690000000,
                    "user_owner": 1,
                    "kind": "asset",
                    "asset_type": "image",
                    "exif": [["Make", "Canon"]],
                    "iptc": [["Keywords", ["harbor", "sunset"]]]
                }"#,
            ),
            (
                "object_7.json",
                r#"{
                    "id": 7,
                    "key": "spring-article",
                    "full_path": "/articles/spring-article",
                    "creation_date": 1695000000,
                    "modification_date": 1695000000,
                    "user_owner": 2,
                    "kind": "object",
                    "class_name": "NewsArticle",
                    "published": true,
                    "fields": [
                        {"name": "headline", "value": "Spring collection unveiled"}
                    ]
                }"#,
            ),
        ])
    }

    /// Get path to the snapshot directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A published page entity with one rendered editable
#[allow(dead_code)]
pub fn page_entity(id: u64, key: &str, body: &str) -> Entity {
    Entity {
        id,
        key: key.to_string(),
        full_path: format!("/pages/{key}"),
        creation_date: 1700000000,
        modification_date: 1700000000,
        user_owner: 1,
        user_modification: None,
        properties: vec![],
        kind: EntityKind::Page {
            editables: vec![Editable {
                name: "content".to_string(),
                kind: EditableKind::Wysiwyg,
                rendered: body.to_string(),
            }],
            title: key.to_string(),
            description: String::new(),
            pretty_url: None,
            published: true,
        },
    }
}

/// A published snippet entity with one rendered editable
#[allow(dead_code)]
pub fn snippet_entity(id: u64, key: &str, body: &str) -> Entity {
    Entity {
        id,
        key: key.to_string(),
        full_path: format!("/snippets/{key}"),
        creation_date: 1700000000,
        modification_date: 1700000000,
        user_owner: 1,
        user_modification: None,
        properties: vec![],
        kind: EntityKind::Snippet {
            editables: vec![Editable {
                name: "content".to_string(),
                kind: EditableKind::Input,
                rendered: body.to_string(),
            }],
            published: true,
        },
    }
}
