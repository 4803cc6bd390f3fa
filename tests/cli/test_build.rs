// Integration tests for the build command

use crate::common::fixtures::SnapshotDir;
use crate::common::helpers::test_config;
use seekbase::cli::commands::{build, BuildArgs};
use seekbase::cli::OutputFormat;
use seekbase::core::storage::TantivyBackend;
use seekbase::core::types::{DocumentId, MainType};
use tempfile::TempDir;

#[test]
fn test_build_indexes_all_snapshots() {
    let snapshots = SnapshotDir::small();
    let index_dir = TempDir::new().unwrap();
    let config = test_config(index_dir.path());

    let args = BuildArgs {
        path: snapshots.path().to_path_buf(),
        include: vec![],
        exclude: vec![],
        quiet: true,
    };
    build::execute(args, &config, OutputFormat::Json).expect("build failed");

    let backend = TantivyBackend::open(index_dir.path()).unwrap();
    let reader = backend.reader().unwrap();
    assert_eq!(reader.searcher().num_docs(), 3);

    let page = backend
        .get_document(&DocumentId::new(MainType::Document, 12))
        .unwrap();
    assert!(page.is_some());
}

#[test]
fn test_build_skips_malformed_snapshots() {
    let snapshots = SnapshotDir::with_files(&[
        (
            "good.json",
            r#"{
                "id": 1,
                "key": "good",
                "full_path": "/good",
                "creation_date": 0,
                "modification_date": 0,
                "user_owner": 1,
                "kind": "document_folder"
            }"#,
        ),
        ("bad.json", "{ not json"),
    ]);
    let index_dir = TempDir::new().unwrap();
    let config = test_config(index_dir.path());

    let args = BuildArgs {
        path: snapshots.path().to_path_buf(),
        include: vec![],
        exclude: vec![],
        quiet: true,
    };
    build::execute(args, &config, OutputFormat::Json).expect("build failed");

    let backend = TantivyBackend::open(index_dir.path()).unwrap();
    let reader = backend.reader().unwrap();
    assert_eq!(reader.searcher().num_docs(), 1);
}

#[test]
fn test_build_rejects_missing_path() {
    let index_dir = TempDir::new().unwrap();
    let config = test_config(index_dir.path());

    let args = BuildArgs {
        path: "/nonexistent/snapshots".into(),
        include: vec![],
        exclude: vec![],
        quiet: true,
    };
    assert!(build::execute(args, &config, OutputFormat::Json).is_err());
}

#[test]
fn test_build_rejects_empty_directory() {
    let empty = TempDir::new().unwrap();
    let index_dir = TempDir::new().unwrap();
    let config = test_config(index_dir.path());

    let args = BuildArgs {
        path: empty.path().to_path_buf(),
        include: vec![],
        exclude: vec![],
        quiet: true,
    };
    assert!(build::execute(args, &config, OutputFormat::Json).is_err());
}

#[test]
fn test_build_exclude_pattern() {
    let snapshots = SnapshotDir::small();
    let index_dir = TempDir::new().unwrap();
    let config = test_config(index_dir.path());

    let args = BuildArgs {
        path: snapshots.path().to_path_buf(),
        include: vec![],
        exclude: vec!["asset_*.json".to_string()],
        quiet: true,
    };
    build::execute(args, &config, OutputFormat::Json).expect("build failed");

    let backend = TantivyBackend::open(index_dir.path()).unwrap();
    let reader = backend.reader().unwrap();
    assert_eq!(reader.searcher().num_docs(), 2);
}
