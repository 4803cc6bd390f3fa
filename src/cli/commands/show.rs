//! Show command - inspect one stored index document

use crate::cli::output::{colors, format_timestamp};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::storage::TantivyBackend;
use crate::core::types::{DocumentId, MainType};
use clap::Args;
use serde::Serialize;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Main type of the entity (document, asset, object)
    pub main_type: MainType,

    /// Numeric entity id
    pub id: u64,

    /// Include the raw and cleaned text bodies
    #[arg(long)]
    pub text: bool,
}

/// Stored document response
#[derive(Debug, Serialize)]
pub struct ShowResponse {
    pub document_id: String,
    pub key: String,
    pub full_path: String,
    pub main_type: String,
    pub sub_type: String,
    pub published: bool,
    pub creation_date: i64,
    pub modification_date: i64,
    pub user_owner: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_modification: Option<u64>,
    pub properties: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

/// Execute the show command
pub fn execute(
    args: ShowArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = TantivyBackend::open(&config.storage.index_dir).map_err(|e| {
        format!("No index at {:?}: {e}. Run 'seekbase build' first.", config.storage.index_dir)
    })?;

    let id = DocumentId::new(args.main_type, args.id);
    let document = backend
        .get_document(&id)?
        .ok_or_else(|| format!("No index document for '{id}'"))?;

    let response = ShowResponse {
        document_id: id.to_string(),
        key: document.key.clone(),
        full_path: document.full_path.clone(),
        main_type: args.main_type.as_str().to_string(),
        sub_type: document.sub_type.clone(),
        published: document.published,
        creation_date: document.creation_date,
        modification_date: document.modification_date,
        user_owner: document.user_owner,
        user_modification: document.user_modification,
        properties: document.properties.clone(),
        cleaned_text: args.text.then(|| document.cleaned_text.clone()),
        raw_text: args.text.then(|| document.raw_text.clone()),
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label(&response.document_id));
            println!("  key: {}", response.key);
            println!("  path: {}", colors::entity_path(&response.full_path));
            println!("  type: {}/{}", response.main_type, response.sub_type);
            println!("  published: {}", response.published);
            println!("  created: {}", format_timestamp(response.creation_date));
            println!(
                "  modified: {}",
                format_timestamp(response.modification_date)
            );
            println!("  owner: {}", response.user_owner);
            if let Some(user) = response.user_modification {
                println!("  last modified by: {user}");
            }
            if !response.properties.is_empty() {
                println!("  properties: {}", colors::dim(&response.properties));
            }
            if let Some(text) = &response.cleaned_text {
                println!("\n{}", colors::label("Cleaned text:"));
                println!("{text}");
            }
            if let Some(text) = &response.raw_text {
                println!("\n{}", colors::label("Raw text:"));
                println!("{text}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
