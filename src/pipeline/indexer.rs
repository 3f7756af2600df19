use super::metadata::MetadataCatalog;
use crate::parser::play::get_character;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

// Compiled once; the mapper runs these per line.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_0-9]+").unwrap());

/// Aggregation key of the index stage: all line emissions sharing one
/// `(word, work, character)` triple are reduced into a single batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReduceKey {
    pub word: String,
    pub work: String,
    pub character: String,
}

/// Splits a line into its distinct words: non-word runs and standalone
/// digit/underscore runs become separators, everything is lowercased,
/// and duplicates within the line are dropped (first occurrence wins).
pub fn line_words(line: &str) -> Vec<String> {
    let cleaned = NON_WORD.replace_all(line, " ");
    let cleaned = DIGITS.replace_all(&cleaned, " ");

    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Walks a file's text yielding `(line start byte offset, trimmed line)`
/// for every physical line. Offsets index into the whole file, matching
/// the absolute speech offsets of Stage-1 metadata.
pub fn file_lines(text: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for segment in text.split_inclusive('\n') {
        lines.push((offset, segment.trim_end_matches(['\n', '\r'])));
        offset += segment.len();
    }
    lines
}

/// Index-stage map function for one line.
///
/// Resolves the speaking character through the broadcast catalog and
/// emits one `(ReduceKey, line text)` pair per distinct word in the
/// line. Blank lines emit nothing.
///
/// Returns `None` when the catalog has no entry for `file_index`; that
/// is fatal to this record only, and the caller logs and skips it.
pub fn map_line(
    catalog: &MetadataCatalog,
    file_index: usize,
    offset: usize,
    line: &str,
) -> Option<Vec<(ReduceKey, String)>> {
    if line.trim().is_empty() {
        return Some(Vec::new());
    }

    let metadata = catalog.get(file_index)?;
    let character = get_character(&metadata.offsets, offset);

    let emissions = line_words(line)
        .into_iter()
        .map(|word| {
            (
                ReduceKey {
                    word,
                    work: metadata.title_formatted.clone(),
                    character: character.to_string(),
                },
                line.trim().to_string(),
            )
        })
        .collect();
    Some(emissions)
}
