//! Index Entity Records
//!
//! Structured record types for the three-level index hierarchy. Child
//! collections use `BTreeMap` so enumeration order is deterministic.
//! Every count is the number of line occurrences contributed by reduce
//! batches, accumulated additively.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single indexed word and everything known about it.
///
/// Identity is the lowercase word itself. The invariant
/// `count == sum of works[*].count` holds after every reduce batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
    pub name: String,
    pub count: u64,
    pub works: BTreeMap<String, WorkRecord>,
}

impl WordRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            works: BTreeMap::new(),
        }
    }
}

/// Occurrences of one word inside one work. Parented by a [`WordRecord`],
/// identified by the title-cased work title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkRecord {
    pub title: String,
    pub count: u64,
    pub characters: BTreeMap<String, CharacterRecord>,
}

impl WorkRecord {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            count: 0,
            characters: BTreeMap::new(),
        }
    }
}

/// Occurrences of one word spoken by one character inside one work.
///
/// `mentions` holds the lines in which the word appears, deduplicated
/// within each reduce batch. `count` still counts every line occurrence,
/// so it can exceed `mentions.len()` when a batch repeats a line text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub count: u64,
    pub mentions: Vec<LineRecord>,
}

impl CharacterRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            mentions: Vec::new(),
        }
    }
}

/// One physical line of text in which a word occurs. Immutable once
/// created; the same physical line may be referenced under several
/// words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub text: String,
}
