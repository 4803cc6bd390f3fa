//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub index_dir: String,
    pub fulltext: FulltextOutput,
    pub persist: PersistOutput,
    pub search: SearchOutput,
}

#[derive(Debug, Serialize)]
pub struct FulltextOutput {
    pub min_word_length: usize,
    pub max_word_length: usize,
}

#[derive(Debug, Serialize)]
pub struct PersistOutput {
    pub max_retries: usize,
    pub retry_backoff_min_ms: u64,
    pub retry_backoff_max_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub default_k: usize,
    pub max_k: usize,
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = crate::core::xdg::XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        index_dir: config.storage.index_dir.to_string_lossy().into_owned(),
        fulltext: FulltextOutput {
            min_word_length: config.fulltext.min_word_length,
            max_word_length: config.fulltext.max_word_length,
        },
        persist: PersistOutput {
            max_retries: config.persist.max_retries,
            retry_backoff_min_ms: config.persist.retry_backoff_min_ms,
            retry_backoff_max_ms: config.persist.retry_backoff_max_ms,
        },
        search: SearchOutput {
            default_k: config.search.default_k,
            max_k: config.search.max_k,
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  index_dir: {}", response.index_dir);
            println!("  fulltext:");
            println!("    min_word_length: {}", response.fulltext.min_word_length);
            println!("    max_word_length: {}", response.fulltext.max_word_length);
            println!("  persist:");
            println!("    max_retries: {}", response.persist.max_retries);
            println!(
                "    retry_backoff: {}..{}ms",
                response.persist.retry_backoff_min_ms, response.persist.retry_backoff_max_ms
            );
            println!("  search:");
            println!("    default_k: {}", response.search.default_k);
            println!("    max_k: {}", response.search.max_k);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
