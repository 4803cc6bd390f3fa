//! Search command - query the fulltext index

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::search::SearchService;
use crate::core::storage::TantivyBackend;
use clap::Args;
use serde::Serialize;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (supports boolean operators: AND, OR, NOT)
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show entity paths (no detail lines)
    #[arg(long)]
    pub paths_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub document_id: String,
    pub path: String,
    pub key: String,
    pub main_type: String,
    pub sub_type: String,
    pub published: bool,
    pub score: f32,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = TantivyBackend::open(&config.storage.index_dir).map_err(|e| {
        format!("No index at {:?}: {e}. Run 'seekbase build' first.", config.storage.index_dir)
    })?;

    let service = SearchService::new(&backend, config.search.default_k, config.search.max_k);
    let response = service.search(&args.query, args.limit)?;

    let output = SearchResponseOutput {
        query: response.query.clone(),
        total_results: response.count,
        duration_ms: response.duration_ms,
        results: response
            .hits
            .iter()
            .enumerate()
            .map(|(i, hit)| SearchResultItem {
                rank: i + 1,
                document_id: hit.document_id.clone(),
                path: hit.full_path.clone(),
                key: hit.key.clone(),
                main_type: hit.main_type.clone(),
                sub_type: hit.sub_type.clone(),
                published: hit.published,
                score: hit.score,
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.query));
            } else {
                println!(
                    "Found {} result(s):\n",
                    colors::number(&output.total_results.to_string())
                );

                for result in &output.results {
                    if args.paths_only {
                        println!("{}", colors::entity_path(&result.path));
                    } else {
                        println!(
                            "[{}] {} {}",
                            colors::rank(&result.rank.to_string()),
                            colors::entity_path(&result.path),
                            colors::dim(&format!("(score: {:.2})", result.score))
                        );
                        let published = if result.published {
                            "published"
                        } else {
                            "unpublished"
                        };
                        println!(
                            "    {} {} {}",
                            colors::document_id(&result.document_id),
                            colors::dim(&format!("{}/{}", result.main_type, result.sub_type)),
                            colors::dim(published)
                        );
                        println!();
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
