//! A record is returned exactly when some field is within the edit budget.

use proptest::prelude::*;

use super::strategies::{query, videos};
use edusearch::{
    max_edits_for, substring_distance, Corpus, SearchEngine, Video, DEFAULT_THRESHOLD,
};

fn any_field_hits(video: &Video, query: &str) -> bool {
    let budget = max_edits_for(query.chars().count(), DEFAULT_THRESHOLD);
    let hits = |text: &str| !text.is_empty() && substring_distance(query, text, budget).is_some();
    hits(&video.title) || hits(&video.description) || video.tags.iter().any(|t| hits(t))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_included_iff_some_field_hits(videos in videos(), query in query()) {
        let engine = SearchEngine::with_corpus(Corpus { videos: videos.clone(), ..Default::default() });
        let results = engine.search_videos(&query, None);

        for video in &videos {
            let returned = results.iter().any(|r| r.record.id == video.id);
            prop_assert_eq!(
                returned,
                any_field_hits(video, &query),
                "video {:?} vs query {:?}",
                video.title,
                query
            );
        }
    }

    #[test]
    fn prop_scores_stay_in_unit_interval(videos in videos(), query in query()) {
        let engine = SearchEngine::with_corpus(Corpus { videos, ..Default::default() });
        for result in engine.search_videos(&query, None) {
            prop_assert!(result.score >= 0.0);
            prop_assert!(result.score < 1.0, "a returned record has at least one hit");
        }
    }

    #[test]
    fn prop_whitespace_query_is_empty(videos in videos(), spaces in "[ \t\n]{0,6}") {
        let engine = SearchEngine::with_corpus(Corpus { videos, ..Default::default() });
        prop_assert!(engine.search_videos(&spaces, None).is_empty());
        prop_assert!(engine.global_search(&spaces).is_empty());
    }
}
