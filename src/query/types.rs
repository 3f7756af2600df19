use serde::{Deserialize, Serialize};

/// Filter value meaning "no restriction" for both the work and the
/// character filter.
pub const ANY: &str = "Any";

/// Everything a search returns: mentions grouped by work and character,
/// the word's total occurrence count, and a spelling suggestion when the
/// term itself was not found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub term: String,
    pub total_count: u64,
    pub works: Vec<WorkMentions>,
    pub suggestion: Option<String>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }
}

/// One work's share of the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkMentions {
    pub title: String,
    pub characters: Vec<CharacterMentions>,
}

/// One character's highlighted mention lines within a work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterMentions {
    pub name: String,
    pub lines: Vec<String>,
}
