//! Fulltext queries over the backend index.
//!
//! BM25-ranked search across the cleaned text and flattened
//! properties of stored index documents.

use crate::core::error::{Result, SeekbaseError};
use crate::core::storage::TantivyBackend;
use crate::core::types::{SearchHit, SearchResponse};
use std::time::Instant;
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::Value;
use tantivy::TantivyDocument;

/// BM25 search over the fulltext backend
pub struct SearchService<'a> {
    backend: &'a TantivyBackend,
    default_k: usize,
    max_k: usize,
}

impl<'a> SearchService<'a> {
    pub fn new(backend: &'a TantivyBackend, default_k: usize, max_k: usize) -> Self {
        Self {
            backend,
            default_k,
            max_k,
        }
    }

    /// Execute a query, returning up to `k` document summaries
    pub fn search(&self, query_str: &str, k: Option<usize>) -> Result<SearchResponse> {
        let start = Instant::now();

        if query_str.trim().is_empty() {
            return Err(SeekbaseError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }

        let k_limit = k.unwrap_or(self.default_k).min(self.max_k);

        let reader = self.backend.reader()?;
        let searcher = reader.searcher();
        let schema = self.backend.schema();

        let cleaned_text_field = schema
            .get_field("cleaned_text")
            .map_err(|e| SeekbaseError::SearchFailed(format!("Missing cleaned_text field: {e}")))?;
        let properties_field = schema
            .get_field("properties")
            .map_err(|e| SeekbaseError::SearchFailed(format!("Missing properties field: {e}")))?;

        let query_parser = QueryParser::for_index(
            self.backend.index(),
            vec![cleaned_text_field, properties_field],
        );

        let query = query_parser
            .parse_query(query_str)
            .map_err(|e| SeekbaseError::InvalidQuery(format!("Failed to parse query: {e}")))?;

        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(k_limit))
            .map_err(|e| SeekbaseError::SearchFailed(format!("Search failed: {e}")))?;

        let mut hits = Vec::new();
        for (score, address) in top_docs {
            let stored: TantivyDocument = searcher.doc(address).map_err(|e| {
                SeekbaseError::SearchFailed(format!("Failed to retrieve document: {e}"))
            })?;

            hits.push(SearchHit {
                score,
                document_id: extract(&stored, schema, "id")?,
                key: extract(&stored, schema, "key")?,
                full_path: extract(&stored, schema, "full_path")?,
                main_type: extract(&stored, schema, "main_type")?,
                sub_type: extract(&stored, schema, "sub_type")?,
                published: stored
                    .get_first(schema.get_field("published").map_err(|e| {
                        SeekbaseError::SearchFailed(format!("Missing published field: {e}"))
                    })?)
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false),
            });
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = hits.len();

        Ok(SearchResponse {
            query: query_str.to_string(),
            hits,
            count,
            duration_ms,
        })
    }
}

fn extract(
    stored: &TantivyDocument,
    schema: &tantivy::schema::Schema,
    name: &str,
) -> Result<String> {
    let field = schema
        .get_field(name)
        .map_err(|e| SeekbaseError::SearchFailed(format!("Missing {name} field: {e}")))?;
    Ok(stored
        .get_first(field)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string())
}
