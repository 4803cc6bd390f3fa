// Integration tests for persistence: save, replace, delete

use crate::common::fixtures::page_entity;
use crate::common::helpers::{seeded_backend, test_saver};
use seekbase::core::extract::DocumentBuilder;
use seekbase::core::types::{DocumentId, MainType};
use seekbase::SeekbaseError;
use tempfile::TempDir;

#[test]
fn test_save_and_get_roundtrip() {
    let entity = page_entity(21, "about", "<p>Company history and team</p>");
    let (backend, _dir) = seeded_backend(&[entity]);

    let id = DocumentId::new(MainType::Document, 21);
    let stored = backend.get_document(&id).unwrap().expect("document stored");

    assert_eq!(stored.id, Some(id));
    assert_eq!(stored.key, "about");
    assert_eq!(stored.full_path, "/pages/about");
    assert!(stored.published);
    assert!(stored.cleaned_text.contains("history"));
}

#[test]
fn test_resave_replaces_not_appends() {
    let dir = TempDir::new().unwrap();
    let mut saver = test_saver(dir.path());
    let builder = DocumentBuilder::new(3, 84);

    let first = builder.build(&page_entity(5, "pricing", "<p>old pricing table</p>"));
    saver.save(&first).unwrap();

    let second = builder.build(&page_entity(5, "pricing", "<p>updated pricing table</p>"));
    saver.save(&second).unwrap();

    let backend = saver.into_backend();
    let reader = backend.reader().unwrap();
    assert_eq!(reader.searcher().num_docs(), 1);

    let id = DocumentId::new(MainType::Document, 5);
    let stored = backend.get_document(&id).unwrap().unwrap();
    assert!(stored.cleaned_text.contains("updated"));
    assert!(!stored.cleaned_text.contains("old"));
}

#[test]
fn test_save_without_id_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut saver = test_saver(dir.path());

    let mut doc = seekbase::IndexDocument::empty();
    doc.key = "orphan".to_string();

    let err = saver.save(&doc).unwrap_err();
    assert!(matches!(err, SeekbaseError::MissingDocumentId));
}

#[test]
fn test_delete_removes_document() {
    let entity = page_entity(9, "legal", "<p>terms and conditions</p>");
    let (mut backend, _dir) = seeded_backend(&[entity]);

    let id = DocumentId::new(MainType::Document, 9);
    assert!(backend.get_document(&id).unwrap().is_some());

    backend.delete_document(&id).unwrap();
    assert!(backend.get_document(&id).unwrap().is_none());
}

#[test]
fn test_same_numeric_id_across_main_types() {
    let (mut backend, dir) = seeded_backend(&[page_entity(4, "page-four", "<p>page body</p>")]);

    // an asset with the same numeric id must not collide
    let asset_json = r#"{
        "id": 4,
        "key": "chart.txt",
        "full_path": "/files/chart.txt",
        "creation_date": 0,
        "modification_date": 0,
        "user_owner": 1,
        "kind": "asset",
        "asset_type": "text",
        "data": [99, 104, 97, 114, 116],
        "file_size": 5
    }"#;
    let asset: seekbase::Entity = serde_json::from_str(asset_json).unwrap();
    let doc = DocumentBuilder::new(3, 84).build(&asset);
    backend.save_document(&doc).unwrap();

    let page_id = DocumentId::new(MainType::Document, 4);
    let asset_id = DocumentId::new(MainType::Asset, 4);
    assert!(backend.get_document(&page_id).unwrap().is_some());
    assert!(backend.get_document(&asset_id).unwrap().is_some());

    let reader = backend.reader().unwrap();
    assert_eq!(reader.searcher().num_docs(), 2);
    drop(dir);
}

#[test]
fn test_index_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut saver = test_saver(dir.path());
        let doc = DocumentBuilder::new(3, 84)
            .build(&page_entity(30, "archive", "<p>older announcements</p>"));
        saver.save(&doc).unwrap();
    }

    let backend = seekbase::TantivyBackend::open(dir.path()).unwrap();
    let id = DocumentId::new(MainType::Document, 30);
    let stored = backend.get_document(&id).unwrap().unwrap();
    assert_eq!(stored.key, "archive");
}
