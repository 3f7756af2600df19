use super::types::{CharacterRecord, LineRecord, WordRecord, WorkRecord};

use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Concurrent in-memory index keyed by word.
///
/// Each word's whole subtree (works, characters, mentions) lives under a
/// single map entry, so `apply_reduction` mutates all three levels under
/// one entry guard. Reduce shards that touch different words never
/// contend; shards that touch the same word serialize on its entry.
pub struct IndexStore {
    words: DashMap<String, WordRecord>,
}

impl IndexStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            words: DashMap::new(),
        })
    }

    /// Applies one reduce batch for the key `(word, work, character)`.
    ///
    /// Upserts all three levels, increments every level's count by the
    /// number of line values in the batch, and appends the batch's
    /// deduplicated line set to the character's mention list. Counts
    /// accumulate across repeated pipeline runs; callers that want a
    /// fresh index must [`clear`](Self::clear) first.
    pub fn apply_reduction(&self, word: &str, work: &str, character: &str, lines: &[String]) {
        let delta = lines.len() as u64;

        let mut word_entry = self
            .words
            .entry(word.to_string())
            .or_insert_with(|| WordRecord::new(word));
        word_entry.count += delta;

        let work_record = word_entry
            .works
            .entry(work.to_string())
            .or_insert_with(|| WorkRecord::new(work));
        work_record.count += delta;

        let character_record = work_record
            .characters
            .entry(character.to_string())
            .or_insert_with(|| CharacterRecord::new(character));
        character_record.count += delta;

        let mut seen: HashSet<&str> = HashSet::new();
        for line in lines {
            if seen.insert(line.as_str()) {
                character_record.mentions.push(LineRecord { text: line.clone() });
            }
        }
    }

    /// Point read of a word's whole subtree.
    pub fn get_word(&self, name: &str) -> Option<WordRecord> {
        self.words.get(name).map(|entry| entry.value().clone())
    }

    pub fn word_count(&self, name: &str) -> Option<u64> {
        self.words.get(name).map(|entry| entry.count)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    /// Lists the titles of every work a word occurs in, or an empty list
    /// for an unknown word.
    pub fn list_works(&self, word: &str) -> Vec<String> {
        self.words
            .get(word)
            .map(|entry| entry.works.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Lists the characters who say a word within one work.
    pub fn list_characters(&self, word: &str, work: &str) -> Vec<String> {
        self.words
            .get(word)
            .and_then(|entry| {
                entry
                    .works
                    .get(work)
                    .map(|work_record| work_record.characters.keys().cloned().collect())
            })
            .unwrap_or_default()
    }

    /// Lists the mention lines for one `(word, work, character)` triple,
    /// optionally capped to the first `cap` lines.
    pub fn mentions(
        &self,
        word: &str,
        work: &str,
        character: &str,
        cap: Option<usize>,
    ) -> Vec<String> {
        let lines: Vec<String> = self
            .words
            .get(word)
            .and_then(|entry| {
                entry.works.get(work).and_then(|work_record| {
                    work_record.characters.get(character).map(|character_record| {
                        character_record
                            .mentions
                            .iter()
                            .map(|line| line.text.clone())
                            .collect()
                    })
                })
            })
            .unwrap_or_default();

        match cap {
            Some(limit) => lines.into_iter().take(limit).collect(),
            None => lines,
        }
    }

    /// Deletes every word, work, character, and line record.
    pub fn clear(&self) {
        self.words.clear();
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
