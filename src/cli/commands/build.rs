//! Build command - build or update the index from entity snapshots

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::extract::DocumentBuilder;
use crate::core::persist::DocumentSaver;
use crate::core::snapshot::{load_entity, SnapshotWalker};
use crate::core::storage::TantivyBackend;
use crate::core::types::BuildStats;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory containing entity snapshot JSON files
    pub path: PathBuf,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Suppress per-file progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub path: String,
    #[serde(flatten)]
    pub stats: BuildStats,
}

/// Execute the build command
pub fn execute(
    args: BuildArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = args.path.canonicalize().map_err(|e| {
        format!(
            "Invalid path '{}': {}. Make sure the path exists and is accessible.",
            args.path.display(),
            e
        )
    })?;

    if !path.is_dir() {
        return Err(format!(
            "Path '{}' is not a directory. Point the build command at a \
             directory of snapshot JSON files.",
            path.display()
        )
        .into());
    }

    let walker = SnapshotWalker::new(args.include.clone(), args.exclude.clone())?;
    let files = walker.collect_files(&path)?;

    if files.is_empty() {
        return Err(format!(
            "No snapshot files found under '{}'. Snapshots are JSON files, \
             one entity each.",
            path.display()
        )
        .into());
    }

    let backend = TantivyBackend::open_or_create(&config.storage.index_dir)?;
    let mut saver = DocumentSaver::new(backend, config.retry_policy());
    let builder = DocumentBuilder::new(
        config.fulltext.min_word_length,
        config.fulltext.max_word_length,
    );

    let start = Instant::now();
    let mut saved = 0usize;
    let mut skipped = 0usize;

    for file in &files {
        let entity = match load_entity(file) {
            Ok(entity) => entity,
            Err(e) => {
                tracing::warn!("Skipping snapshot {:?}: {}", file, e);
                skipped += 1;
                continue;
            }
        };

        let document = builder.build(&entity);
        match saver.save(&document) {
            Ok(()) => {
                saved += 1;
                if !args.quiet && format == OutputFormat::Human {
                    println!(
                        "  {} {}",
                        colors::success("indexed"),
                        colors::entity_path(&entity.full_path)
                    );
                }
            }
            Err(e) => {
                tracing::error!("Failed to save document from {:?}: {}", file, e);
                skipped += 1;
            }
        }
    }

    let elapsed = start.elapsed();

    let response = BuildResponse {
        path: path.display().to_string(),
        stats: BuildStats {
            documents_saved: saved,
            snapshots_skipped: skipped,
            duration_ms: elapsed.as_millis() as u64,
        },
    };

    match format {
        OutputFormat::Human => {
            println!(
                "\nIndexed {} document(s) in {} ({} skipped)",
                colors::number(&response.stats.documents_saved.to_string()),
                colors::number(&format_duration(elapsed.as_secs_f64())),
                response.stats.snapshots_skipped
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
