//! Delete command - remove one entity's document from the index

use crate::cli::output::{colors, print_success};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::storage::TantivyBackend;
use crate::core::types::{DocumentId, MainType};
use clap::Args;
use serde::Serialize;

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Main type of the entity (document, asset, object)
    pub main_type: MainType,

    /// Numeric entity id
    pub id: u64,
}

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub document_id: String,
    pub deleted: bool,
}

/// Execute the delete command
pub fn execute(
    args: DeleteArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut backend = TantivyBackend::open(&config.storage.index_dir).map_err(|e| {
        format!("No index at {:?}: {e}. Run 'seekbase build' first.", config.storage.index_dir)
    })?;

    let id = DocumentId::new(args.main_type, args.id);

    // Report whether anything was actually there
    let existed = backend.get_document(&id)?.is_some();
    backend.delete_document(&id)?;

    let response = DeleteResponse {
        document_id: id.to_string(),
        deleted: existed,
    };

    match format {
        OutputFormat::Human => {
            if response.deleted {
                print_success(&format!("Deleted '{}' from the index", response.document_id));
            } else {
                println!(
                    "No index document for '{}' (nothing to delete)",
                    colors::document_id(&response.document_id)
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
