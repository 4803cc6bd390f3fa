//! Entity snapshot discovery and loading.
//!
//! Snapshots are JSON files describing one entity each. The walker
//! traverses a directory tree and filters files using glob patterns,
//! handling errors gracefully (permission denied, etc.) without
//! crashing.

use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::entity::Entity;
use crate::core::error::{Result, SeekbaseError};

/// Snapshot files larger than this are skipped
pub const MAX_SNAPSHOT_BYTES: u64 = 16 * 1024 * 1024;

/// Load one entity snapshot from a JSON file
pub fn load_entity(path: &Path) -> Result<Entity> {
    let contents = fs::read_to_string(path).map_err(|e| {
        SeekbaseError::ExtractionFailed(format!("Failed to read snapshot {path:?}: {e}"))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        SeekbaseError::ExtractionFailed(format!("Invalid entity snapshot {path:?}: {e}"))
    })
}

/// File system walker for entity snapshots
pub struct SnapshotWalker {
    /// Patterns to include (defaults to "*.json")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/drafts/**")
    exclude_patterns: Vec<Pattern>,
}

impl SnapshotWalker {
    /// Create a new snapshot walker
    ///
    /// An empty include list defaults to `*.json`.
    pub fn new(include_patterns: Vec<String>, exclude_patterns: Vec<String>) -> Result<Self> {
        let include_patterns = if include_patterns.is_empty() {
            vec!["*.json".to_string()]
        } else {
            include_patterns
        };

        let include = include_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    SeekbaseError::ConfigError(format!("Invalid include pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let exclude = exclude_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    SeekbaseError::ConfigError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            include_patterns: include,
            exclude_patterns: exclude,
        })
    }

    /// Collect all matching snapshot files from a directory
    ///
    /// Traverses the directory tree, applies include/exclude
    /// patterns and filters by file size.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > MAX_SNAPSHOT_BYTES {
                            tracing::debug!(
                                "Skipping large snapshot: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    if self.matches_patterns(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Determine if a directory entry should be processed
    ///
    /// Filters out hidden directories and excluded patterns.
    /// Never filters the root directory itself.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        // Never filter the root directory
        if path == root {
            return true;
        }

        // Skip hidden directories (starting with '.')
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') && entry.file_type().is_dir() {
                return false;
            }
        }

        // Check exclude patterns for directories
        // (skip entire directory trees early)
        if entry.file_type().is_dir() {
            for pattern in &self.exclude_patterns {
                if pattern.matches_path(path) {
                    tracing::debug!("Skipping excluded directory: {:?}", path);
                    return false;
                }
            }
        }

        true
    }

    /// Check if a file path matches the include/exclude patterns
    fn matches_patterns(&self, path: &Path) -> bool {
        let path_str = match path.to_str() {
            Some(s) => s,
            None => return false,
        };

        let matches_include = self.include_patterns.iter().any(|p| {
            // Match against both full path and filename
            p.matches(path_str)
                || path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .map(|f| p.matches(f))
                    .unwrap_or(false)
        });

        if !matches_include {
            return false;
        }

        !self
            .exclude_patterns
            .iter()
            .any(|p| p.matches(path_str) || p.matches_path(path))
    }
}
