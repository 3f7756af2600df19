//! Spelling Corrector Module
//!
//! Suggests a replacement for a search term that is absent from the
//! index. Candidates are every string at edit distance 1 from the term
//! (one deletion, adjacent transposition, substitution, or insertion);
//! among the candidates that exist in the index, the one with the
//! highest occurrence count wins.

use crate::store::memory::IndexStore;

use std::collections::BTreeSet;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Generates every string at edit distance 1 from `word`.
///
/// The set is ordered, so candidate iteration (and therefore tie
/// breaking in [`suggest`]) is deterministic.
pub fn edit_distance_one(word: &str) -> BTreeSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut candidates = BTreeSet::new();

    for split in 0..=chars.len() {
        let (head, tail) = chars.split_at(split);

        // Deletion of the character right after the split
        if !tail.is_empty() {
            candidates.insert(collect(head, &tail[1..], None));
        }
        // Transposition of the two characters straddling the split point
        if tail.len() > 1 {
            let mut swapped = Vec::with_capacity(tail.len());
            swapped.push(tail[1]);
            swapped.push(tail[0]);
            swapped.extend_from_slice(&tail[2..]);
            candidates.insert(collect(head, &swapped, None));
        }
        for letter in ALPHABET.chars() {
            // Substitution of the character after the split
            if !tail.is_empty() {
                candidates.insert(collect(head, &tail[1..], Some(letter)));
            }
            // Insertion at the split point
            candidates.insert(collect(head, tail, Some(letter)));
        }
    }
    candidates
}

fn collect(head: &[char], tail: &[char], inserted: Option<char>) -> String {
    let mut word = String::with_capacity(head.len() + tail.len() + 1);
    word.extend(head);
    if let Some(letter) = inserted {
        word.push(letter);
    }
    word.extend(tail);
    word
}

/// Picks the best existing suggestion for a misspelled word.
///
/// Returns `None` when the word itself exists in the index (nothing to
/// correct), and otherwise the edit-distance-1 candidate present in the
/// index with the strictly highest occurrence count. Ties keep the
/// first candidate seen. `None` when no candidate exists.
pub fn suggest(store: &IndexStore, word: &str) -> Option<String> {
    if store.contains(word) {
        return None;
    }

    let mut best_count = 0;
    let mut suggestion = None;
    for candidate in edit_distance_one(word) {
        if let Some(count) = store.word_count(&candidate) {
            if count > best_count {
                best_count = count;
                suggestion = Some(candidate);
            }
        }
    }
    suggestion
}

#[cfg(test)]
mod tests;
