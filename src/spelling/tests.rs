//! Spelling Corrector Tests

#[cfg(test)]
mod tests {
    use crate::spelling::{edit_distance_one, suggest};
    use crate::store::memory::IndexStore;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|text| text.to_string()).collect()
    }

    // ============================================================
    // CANDIDATE GENERATION TESTS - edit_distance_one
    // ============================================================

    #[test]
    fn test_candidates_include_deletions() {
        let candidates = edit_distance_one("love");
        assert!(candidates.contains("ove"));
        assert!(candidates.contains("lve"));
        assert!(candidates.contains("loe"));
        assert!(candidates.contains("lov"));
    }

    #[test]
    fn test_candidates_include_transpositions() {
        let candidates = edit_distance_one("love");
        assert!(candidates.contains("olve"));
        assert!(candidates.contains("lvoe"));
        assert!(candidates.contains("loev"));
    }

    #[test]
    fn test_candidates_include_substitutions() {
        let candidates = edit_distance_one("lave");
        assert!(candidates.contains("love"));
        assert!(candidates.contains("live"));
        assert!(candidates.contains("cave"));
    }

    #[test]
    fn test_candidates_include_insertions() {
        let candidates = edit_distance_one("ove");
        assert!(candidates.contains("love"));
        assert!(candidates.contains("over"));
    }

    #[test]
    fn test_candidates_exclude_distance_two() {
        let candidates = edit_distance_one("love");
        assert!(!candidates.contains("lie"), "two edits away");
        assert!(!candidates.contains("lovers"), "two insertions away");
    }

    #[test]
    fn test_candidates_of_empty_word() {
        // Only single-letter insertions are reachable
        let candidates = edit_distance_one("");
        assert_eq!(candidates.len(), 26);
        assert!(candidates.contains("a"));
        assert!(candidates.contains("z"));
    }

    // ============================================================
    // SUGGESTION TESTS - suggest
    // ============================================================

    fn seeded_store() -> std::sync::Arc<IndexStore> {
        let store = IndexStore::new();
        // 'love' is by far the most frequent word
        store.apply_reduction(
            "love",
            "Romeo And Juliet",
            "Romeo",
            &lines(&["a", "b", "c", "d"]),
        );
        store.apply_reduction("live", "Hamlet", "Hamlet", &lines(&["e"]));
        store.apply_reduction("dove", "Hamlet", "Ophelia", &lines(&["f", "g"]));
        store
    }

    #[test]
    fn test_suggest_none_for_existing_word() {
        let store = seeded_store();
        assert_eq!(suggest(&store, "love"), None);
    }

    #[test]
    fn test_suggest_picks_highest_count() {
        let store = seeded_store();
        // 'lave' is distance 1 from love (4), live (1), dove is distance 2
        assert_eq!(suggest(&store, "lave"), Some("love".to_string()));
    }

    #[test]
    fn test_suggest_none_without_candidates() {
        let store = seeded_store();
        assert_eq!(suggest(&store, "zzzqrx"), None);
    }

    #[test]
    fn test_suggest_only_indexed_words() {
        let store = seeded_store();
        for probe in ["lve", "lovee", "ilve", "lovr"] {
            if let Some(suggestion) = suggest(&store, probe) {
                assert!(
                    store.word_count(&suggestion).unwrap() > 0,
                    "suggestion '{}' must exist in the index",
                    suggestion
                );
            }
        }
    }

    #[test]
    fn test_suggest_empty_store() {
        let store = IndexStore::new();
        assert_eq!(suggest(&store, "anything"), None);
    }
}
