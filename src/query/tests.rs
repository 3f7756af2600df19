//! Query Engine Tests
//!
//! Validates filter resolution, proportional capping, highlighting, and
//! the spelling-suggestion fallback.

#[cfg(test)]
mod tests {
    use crate::query::engine::{QueryEngine, PAGE_LIMIT};
    use crate::query::highlight::{any_case_word_regex, bold};
    use crate::query::types::{SearchResults, ANY};
    use crate::store::memory::IndexStore;
    use std::sync::Arc;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|text| text.to_string()).collect()
    }

    /// A small index: "love" in two works, three characters.
    fn small_engine() -> (Arc<IndexStore>, QueryEngine) {
        let store = IndexStore::new();
        store.apply_reduction(
            "love",
            "Romeo And Juliet",
            "Romeo",
            &lines(&["Did my heart love till now?"]),
        );
        store.apply_reduction(
            "love",
            "Hamlet",
            "Hamlet",
            &lines(&["I did love you once."]),
        );
        store.apply_reduction(
            "love",
            "Hamlet",
            "Ophelia",
            &lines(&["you made me believe you did love me"]),
        );
        (store.clone(), QueryEngine::new(store))
    }

    fn total_lines(results: &SearchResults) -> usize {
        results
            .works
            .iter()
            .flat_map(|work| &work.characters)
            .map(|character| character.lines.len())
            .sum()
    }

    // ============================================================
    // HIGHLIGHTING TESTS
    // ============================================================

    #[test]
    fn test_any_case_regex_shape() {
        assert_eq!(any_case_word_regex("love"), r"\b[Ll][Oo][Vv][Ee]\b");
    }

    #[test]
    fn test_bold_preserves_original_casing() {
        let line = "Love looks not with the eyes, but LOVE is blind";
        let highlighted = bold("love", line);
        assert_eq!(
            highlighted,
            "<b>Love</b> looks not with the eyes, but <b>LOVE</b> is blind"
        );
    }

    #[test]
    fn test_bold_whole_words_only() {
        let highlighted = bold("love", "A lovely glove is not love");
        assert_eq!(highlighted, "A lovely glove is not <b>love</b>");
    }

    #[test]
    fn test_bold_no_match_leaves_line_untouched() {
        assert_eq!(bold("hate", "all about love"), "all about love");
    }

    // ============================================================
    // FILTER TESTS - search
    // ============================================================

    #[test]
    fn test_search_any_any_returns_all_works() {
        let (_, engine) = small_engine();
        let results = engine.search("love", ANY, ANY);

        assert_eq!(results.total_count, 3);
        assert_eq!(results.works.len(), 2);
        assert!(results.suggestion.is_none());

        let hamlet = results
            .works
            .iter()
            .find(|work| work.title == "Hamlet")
            .unwrap();
        let speakers: Vec<&str> = hamlet
            .characters
            .iter()
            .map(|character| character.name.as_str())
            .collect();
        assert_eq!(speakers, vec!["Hamlet", "Ophelia"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_term() {
        let (_, engine) = small_engine();
        let results = engine.search("LoVe", ANY, ANY);
        assert_eq!(results.total_count, 3);
        assert_eq!(results.term, "love");
    }

    #[test]
    fn test_search_work_filter_narrows_and_uncaps() {
        let (_, engine) = small_engine();
        let results = engine.search("love", "Hamlet", ANY);

        assert_eq!(results.works.len(), 1);
        assert_eq!(results.works[0].title, "Hamlet");
        assert_eq!(results.works[0].characters.len(), 2);
    }

    #[test]
    fn test_search_character_filter_narrows_to_one_speaker() {
        let (_, engine) = small_engine();
        let results = engine.search("love", "Hamlet", "Ophelia");

        assert_eq!(results.works.len(), 1);
        assert_eq!(results.works[0].characters.len(), 1);
        assert_eq!(results.works[0].characters[0].name, "Ophelia");
        assert_eq!(results.works[0].characters[0].lines.len(), 1);
    }

    #[test]
    fn test_search_unknown_work_filter_returns_empty() {
        let (_, engine) = small_engine();
        let results = engine.search("love", "Macbeth", ANY);
        assert!(results.is_empty());
        // The word itself exists, so the total count still reports it
        assert_eq!(results.total_count, 3);
    }

    #[test]
    fn test_search_highlights_returned_lines() {
        let (_, engine) = small_engine();
        let results = engine.search("love", "Romeo And Juliet", ANY);

        let line = &results.works[0].characters[0].lines[0];
        assert_eq!(line, "Did my heart <b>love</b> till now?");
    }

    // ============================================================
    // PAGINATION TESTS
    // ============================================================

    #[test]
    fn test_uncapped_below_page_limit() {
        let (_, engine) = small_engine();
        // 3 occurrences <= PAGE_LIMIT: nothing is capped
        let results = engine.search("love", ANY, ANY);
        assert_eq!(total_lines(&results), 3);
    }

    #[test]
    fn test_proportional_cap_above_page_limit() {
        let store = IndexStore::new();
        let many: Vec<String> = (0..12).map(|i| format!("line {} of love", i)).collect();
        store.apply_reduction("love", "Hamlet", "Hamlet", &many);
        store.apply_reduction("love", "Romeo And Juliet", "Romeo", &many);
        let engine = QueryEngine::new(store);

        let results = engine.search("love", ANY, ANY);
        assert_eq!(results.total_count, 24);

        // 24 > PAGE_LIMIT, two works: each work capped at PAGE_LIMIT / 2
        for work in &results.works {
            let work_lines: usize = work
                .characters
                .iter()
                .map(|character| character.lines.len())
                .sum();
            assert_eq!(work_lines, PAGE_LIMIT / 2);
        }
    }

    #[test]
    fn test_work_filter_lifts_cap() {
        let store = IndexStore::new();
        let many: Vec<String> = (0..12).map(|i| format!("line {} of love", i)).collect();
        store.apply_reduction("love", "Hamlet", "Hamlet", &many);
        let engine = QueryEngine::new(store);

        let results = engine.search("love", "Hamlet", ANY);
        assert_eq!(total_lines(&results), 12);
    }

    // ============================================================
    // MISS AND SUGGESTION TESTS
    // ============================================================

    #[test]
    fn test_search_miss_returns_suggestion() {
        let (_, engine) = small_engine();
        let results = engine.search("lave", ANY, ANY);

        assert!(results.is_empty());
        assert_eq!(results.total_count, 0);
        assert_eq!(results.suggestion, Some("love".to_string()));
    }

    #[test]
    fn test_search_miss_without_close_word() {
        let (_, engine) = small_engine();
        let results = engine.search("zzzqrx", ANY, ANY);

        assert!(results.is_empty());
        assert!(results.suggestion.is_none());
    }

    #[test]
    fn test_search_after_clear_is_empty() {
        let (store, engine) = small_engine();
        store.clear();

        let results = engine.search("love", ANY, ANY);
        assert!(results.is_empty());
        assert_eq!(results.total_count, 0);
    }

    // ============================================================
    // ENUMERATION TESTS
    // ============================================================

    #[test]
    fn test_list_works_and_characters() {
        let (_, engine) = small_engine();

        assert_eq!(
            engine.list_works("love"),
            vec!["Hamlet".to_string(), "Romeo And Juliet".to_string()]
        );
        assert_eq!(
            engine.list_characters("love", "Hamlet"),
            vec!["Hamlet".to_string(), "Ophelia".to_string()]
        );
        assert!(engine.list_works("missing").is_empty());
        assert!(engine.list_characters("love", "Macbeth").is_empty());
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_search_results_serialization() {
        let (_, engine) = small_engine();
        let results = engine.search("love", ANY, ANY);

        let json = serde_json::to_string(&results).expect("serialization failed");
        let restored: SearchResults = serde_json::from_str(&json).expect("deserialization failed");

        assert_eq!(restored.term, "love");
        assert_eq!(restored.total_count, 3);
        assert_eq!(restored.works.len(), 2);
    }
}
