// Integration tests for snapshot loading and document building

use crate::common::fixtures::SnapshotDir;
use seekbase::core::extract::DocumentBuilder;
use seekbase::core::snapshot::{load_entity, SnapshotWalker};

#[test]
fn test_walk_and_build_small_snapshot_set() {
    let snapshots = SnapshotDir::small();
    let walker = SnapshotWalker::new(vec![], vec![]).unwrap();
    let files = walker.collect_files(snapshots.path()).unwrap();
    assert_eq!(files.len(), 3);

    let builder = DocumentBuilder::new(3, 84);
    for file in &files {
        let entity = load_entity(file).expect("snapshot should parse");
        let doc = builder.build(&entity);

        assert!(doc.id.is_some());
        assert!(!doc.cleaned_text.is_empty());
        assert!(doc.raw_text.starts_with("ID: "));
    }
}

#[test]
fn test_page_snapshot_builds_expected_text() {
    let snapshots = SnapshotDir::small();
    let path = snapshots.path().join("page_12.json");

    let entity = load_entity(&path).unwrap();
    let doc = DocumentBuilder::new(3, 84).build(&entity);

    assert_eq!(doc.id.unwrap().to_string(), "document_12");
    assert_eq!(doc.sub_type, "page");
    assert!(doc.published);
    assert!(doc.cleaned_text.contains("flagship"));
    assert!(doc.cleaned_text.contains("Product"));
    assert!(!doc.cleaned_text.contains("<p>"));
}

#[test]
fn test_image_snapshot_carries_metadata_text() {
    let snapshots = SnapshotDir::small();
    let path = snapshots.path().join("asset_3.json");

    let entity = load_entity(&path).unwrap();
    let doc = DocumentBuilder::new(3, 84).build(&entity);

    assert_eq!(doc.id.unwrap().to_string(), "asset_3");
    assert!(doc.raw_text.contains("Make : Canon"));
    assert!(doc.raw_text.contains("harbor - sunset"));
}

#[test]
fn test_object_snapshot_uses_class_name() {
    let snapshots = SnapshotDir::small();
    let path = snapshots.path().join("object_7.json");

    let entity = load_entity(&path).unwrap();
    let doc = DocumentBuilder::new(3, 84).build(&entity);

    assert_eq!(doc.sub_type, "NewsArticle");
    assert!(doc.cleaned_text.contains("Spring"));
    assert!(doc.cleaned_text.contains("unveiled"));
}

#[test]
fn test_malformed_snapshot_is_an_error() {
    let snapshots = SnapshotDir::with_files(&[("broken.json", r#"{"id": "not a number"}"#)]);
    let path = snapshots.path().join("broken.json");

    assert!(load_entity(&path).is_err());
}
