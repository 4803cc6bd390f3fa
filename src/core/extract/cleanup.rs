//! Fulltext cleanup pass.
//!
//! Turns accumulated raw text into the tokenized, filtered form
//! that gets indexed: markup stripped, entities decoded,
//! punctuation normalized, words bounded by configured lengths
//! and a per-word repetition cap. All length checks are
//! character-based, so multi-byte UTF-8 words are measured
//! correctly.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// If a word occurs more often than this it gets stripped, to
/// keep a single repeated word from dominating the index.
pub const MAX_WORD_OCCURRENCES: usize = 3;

/// Matches HTML/XML tags and processing instructions, non-greedy,
/// spanning newlines. An unterminated `<?` runs to end of input.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)(<\?.*?(\?>|$)|<[^<]+>)").expect("tag regex is valid"));

/// Strip tags and processing instructions, keeping the text in
/// between. Used on rendered editable output before it joins the
/// raw text.
pub fn strip_tags(data: &str) -> String {
    TAG_RE.replace_all(data, "").into_owned()
}

/// Collapse runs of spaces to a single space
pub fn collapse_spaces(data: &str) -> String {
    data.split(' ')
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean raw extracted text for indexing.
///
/// Steps:
/// 1. Strip tags and processing instructions.
/// 2. Decode HTML entities (full set, including quotes).
/// 3. Replace `, : ; ' "` and newline/tab variants with spaces.
///    Periods are kept so email-address-like tokens stay
///    searchable.
/// 4. Split on spaces, dropping words whose character length is
///    outside `[min_word_length, max_word_length]`.
/// 5. Drop every occurrence of a word beyond
///    [`MAX_WORD_OCCURRENCES`], keeping earlier ones.
/// 6. Rejoin surviving words with single spaces.
pub fn cleanup(data: &str, min_word_length: usize, max_word_length: usize) -> String {
    let stripped = TAG_RE.replace_all(data, "");
    let decoded = html_escape::decode_html_entities(stripped.as_ref());

    let mut normalized = String::with_capacity(decoded.len());
    for ch in decoded.chars() {
        match ch {
            ',' | ':' | ';' | '\'' | '"' | '\n' | '\r' | '\t' => normalized.push(' '),
            _ => normalized.push(ch),
        }
    }

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    let mut kept: Vec<&str> = Vec::new();

    // Splitting on single spaces also collapses runs: empty
    // fragments fall below the minimum length and are dropped.
    for word in normalized.split(' ') {
        let word_length = word.chars().count();
        if word_length < min_word_length || word_length > max_word_length {
            continue;
        }

        let count = occurrences.entry(word).or_insert(0);
        *count += 1;
        if *count > MAX_WORD_OCCURRENCES {
            continue;
        }

        kept.push(word);
    }

    kept.join(" ")
}
