use super::highlight::bold;
use super::types::{CharacterMentions, SearchResults, WorkMentions, ANY};
use crate::spelling;
use crate::store::memory::IndexStore;
use crate::store::types::{WordRecord, WorkRecord};

use std::sync::Arc;

/// Maximum number of lines shown on one unfiltered results page.
pub const PAGE_LIMIT: usize = 10;

/// Read-only query layer over the index store.
pub struct QueryEngine {
    store: Arc<IndexStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<IndexStore>) -> Self {
        Self { store }
    }

    /// Resolves a search term against the index.
    ///
    /// With both filters at [`ANY`], every work is returned and each
    /// work's lines are capped at `PAGE_LIMIT / number_of_works` when
    /// the word's total count exceeds [`PAGE_LIMIT`]. A named work (and
    /// optionally a named character) narrows the result and lifts the
    /// cap. An unknown term returns empty results plus a spelling
    /// suggestion when one exists.
    pub fn search(&self, term: &str, work_filter: &str, character_filter: &str) -> SearchResults {
        let term = term.to_lowercase();

        let Some(word) = self.store.get_word(&term) else {
            tracing::debug!("No index entry for '{}', trying spelling suggestion", term);
            return SearchResults {
                suggestion: spelling::suggest(&self.store, &term),
                term,
                total_count: 0,
                works: Vec::new(),
            };
        };

        let works = if work_filter == ANY {
            self.all_works(&word)
        } else {
            self.filtered_work(&word, work_filter, character_filter)
        };

        SearchResults {
            total_count: word.count,
            works,
            suggestion: None,
            term,
        }
    }

    /// Lists the works a word occurs in; empty when the word is unknown.
    pub fn list_works(&self, word: &str) -> Vec<String> {
        self.store.list_works(&word.to_lowercase())
    }

    /// Lists the characters who say a word within one work.
    pub fn list_characters(&self, word: &str, work: &str) -> Vec<String> {
        self.store.list_characters(&word.to_lowercase(), work)
    }

    fn all_works(&self, word: &WordRecord) -> Vec<WorkMentions> {
        let per_work_cap = if word.count > PAGE_LIMIT as u64 && !word.works.is_empty() {
            Some(PAGE_LIMIT / word.works.len())
        } else {
            None
        };

        word.works
            .values()
            .map(|work| self.work_mentions(&word.name, work, None, per_work_cap))
            .collect()
    }

    fn filtered_work(
        &self,
        word: &WordRecord,
        work_title: &str,
        character_filter: &str,
    ) -> Vec<WorkMentions> {
        let Some(work) = word.works.get(work_title) else {
            return Vec::new();
        };
        let character = (character_filter != ANY).then_some(character_filter);
        vec![self.work_mentions(&word.name, work, character, None)]
    }

    /// Assembles one work's grouped, highlighted mentions. `cap` bounds
    /// the total lines across the work's characters.
    fn work_mentions(
        &self,
        word_name: &str,
        work: &WorkRecord,
        character_filter: Option<&str>,
        cap: Option<usize>,
    ) -> WorkMentions {
        let mut budget = cap;
        let mut characters = Vec::new();

        for character in work.characters.values() {
            if let Some(filter) = character_filter {
                if character.name != filter {
                    continue;
                }
            }
            if budget == Some(0) {
                break;
            }

            let mut lines: Vec<String> = character
                .mentions
                .iter()
                .map(|line| bold(word_name, &line.text))
                .collect();
            if let Some(remaining) = budget {
                lines.truncate(remaining);
                budget = Some(remaining - lines.len());
            }

            characters.push(CharacterMentions {
                name: character.name.clone(),
                lines,
            });
        }

        WorkMentions {
            title: work.title.clone(),
            characters,
        }
    }
}
