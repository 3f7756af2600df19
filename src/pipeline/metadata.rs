use crate::parser::play::{epilog_len, find_title, speech_offsets, titlecase, ParseError};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Stage-1 output for a single file: the work's title and the map from
/// absolute byte offset to speaking character.
///
/// Immutable once extracted. An empty offset map means every line of the
/// file attributes to `EPILOG`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkMetadata {
    pub title: String,
    pub title_formatted: String,
    pub offsets: BTreeMap<usize, String>,
}

impl WorkMetadata {
    /// Extracts metadata from one file's whole text.
    ///
    /// Degrades instead of failing: a file with no detectable title gets
    /// an empty title and no offsets, and a file whose title never
    /// recurs (no structured epilog) gets no offsets. Both cases leave
    /// every line attributed to `EPILOG`.
    pub fn extract(file_name: &str, text: &str) -> Self {
        let title = match find_title(text) {
            Ok(title) => title,
            Err(ParseError::TitleNotFound) => {
                tracing::warn!(
                    "No title found in {}, attributing all lines to the epilog",
                    file_name
                );
                return Self::untitled();
            }
        };

        let offsets = match epilog_len(text, &title) {
            Some(epilog) => speech_offsets(&text[epilog..], epilog),
            None => {
                tracing::warn!("Title of {} does not recur, no epilog detected", file_name);
                BTreeMap::new()
            }
        };

        Self {
            title_formatted: titlecase(&title),
            title,
            offsets,
        }
    }

    fn untitled() -> Self {
        Self {
            title: String::new(),
            title_formatted: String::new(),
            offsets: BTreeMap::new(),
        }
    }
}

/// The complete Stage-1 result: metadata for every file, keyed by file
/// index.
///
/// This is the broadcast dependency of the index stage. It is built once
/// after all Stage-1 tasks have joined, wrapped in an `Arc`, and handed
/// read-only to every Stage-2 task; no task mutates it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MetadataCatalog {
    by_file: HashMap<usize, WorkMetadata>,
}

impl MetadataCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file_index: usize, metadata: WorkMetadata) {
        self.by_file.insert(file_index, metadata);
    }

    pub fn get(&self, file_index: usize) -> Option<&WorkMetadata> {
        self.by_file.get(&file_index)
    }

    pub fn len(&self) -> usize {
        self.by_file.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_file.is_empty()
    }
}
