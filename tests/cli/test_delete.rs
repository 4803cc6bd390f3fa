// Integration tests for the delete command

use crate::common::fixtures::SnapshotDir;
use crate::common::helpers::test_config;
use seekbase::cli::commands::{build, delete, BuildArgs, DeleteArgs};
use seekbase::cli::OutputFormat;
use seekbase::core::storage::TantivyBackend;
use seekbase::core::types::{DocumentId, MainType};
use tempfile::TempDir;

#[test]
fn test_delete_removes_document_from_index() {
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

    let args = DeleteArgs {
        main_type: MainType::Asset,
        id: 3,
    };
    delete::execute(args, &config, OutputFormat::Json).expect("delete failed");

    let backend = TantivyBackend::open(index_dir.path()).unwrap();
    let gone = backend
        .get_document(&DocumentId::new(MainType::Asset, 3))
        .unwrap();
    assert!(gone.is_none());

    // the others are untouched
    let page = backend
        .get_document(&DocumentId::new(MainType::Document, 12))
        .unwrap();
    assert!(page.is_some());
}

#[test]
fn test_delete_nonexistent_is_not_an_error() {
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

    let args = DeleteArgs {
        main_type: MainType::Object,
        id: 404,
    };
    assert!(delete::execute(args, &config, OutputFormat::Json).is_ok());
}
