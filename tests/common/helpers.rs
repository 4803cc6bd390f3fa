// Shared test helpers

use seekbase::core::config::Config;
use seekbase::core::extract::DocumentBuilder;
use seekbase::core::persist::{DocumentSaver, RetryPolicy};
use seekbase::core::storage::TantivyBackend;
use seekbase::Entity;
use std::path::Path;
use tempfile::TempDir;

/// Config pointing at a throwaway index directory
#[allow(dead_code)]
pub fn test_config(index_dir: &Path) -> Config {
    let mut config = Config::default();
    config.storage.index_dir = index_dir.to_path_buf();
    config
}

/// Document saver over a fresh index in `index_dir`
#[allow(dead_code)]
pub fn test_saver(index_dir: &Path) -> DocumentSaver<TantivyBackend> {
    let backend = TantivyBackend::open_or_create(index_dir).expect("index creation failed");
    DocumentSaver::new(backend, RetryPolicy::default())
}

/// Build and persist the given entities into a fresh index,
/// returning the backend (and the tempdir keeping it alive).
#[allow(dead_code)]
pub fn seeded_backend(entities: &[Entity]) -> (TantivyBackend, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut saver = test_saver(dir.path());
    let builder = DocumentBuilder::new(3, 84);

    for entity in entities {
        let doc = builder.build(entity);
        saver.save(&doc).expect("save failed");
    }

    (saver.into_backend(), dir)
}
