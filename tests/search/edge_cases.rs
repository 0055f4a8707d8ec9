//! Edge cases: blank queries, uninitialized indexes, odd input.

use super::common::{ids, make_video, sample_engine};
use edusearch::{Corpus, SearchEngine, MAX_QUERY_CHARS};

#[test]
fn test_blank_queries_return_nothing() {
    let engine = sample_engine();
    for query in ["", " ", "\t\n", "   "] {
        assert!(engine.search_videos(query, None).is_empty());
        assert!(engine.search_courses(query, None).is_empty());
        assert!(engine.search_teachers(query, None).is_empty());
        assert!(engine.search_communities(query, None).is_empty());
        assert!(engine.global_search(query).is_empty());
    }
}

#[test]
fn test_uninitialized_engine_returns_nothing() {
    let engine = SearchEngine::default();
    assert_eq!(engine.videos().generation(), 0);
    assert!(engine.search_videos("calculus", None).is_empty());
    assert!(engine.global_search("calculus").is_empty());
}

#[test]
fn test_query_is_trimmed() {
    let engine = sample_engine();
    assert_eq!(
        engine.search_videos("  calculus  ", None),
        engine.search_videos("calculus", None)
    );
}

#[test]
fn test_very_long_query_does_not_blow_up() {
    let engine = sample_engine();
    let long = "calculus ".repeat(MAX_QUERY_CHARS);
    // Truncated to the first MAX_QUERY_CHARS characters; must simply return
    let _ = engine.global_search(&long);
}

#[test]
fn test_unicode_titles() {
    let engine = SearchEngine::with_corpus(Corpus {
        videos: vec![
            make_video("v1", "数学入门", &[]),
            make_video("v2", "Équations différentielles", &[]),
        ],
        ..Default::default()
    });
    assert_eq!(ids(&engine.search_videos("数学", None)), vec!["v1"]);
    #[cfg(feature = "unicode-normalization")]
    assert_eq!(ids(&engine.search_videos("equations", None)), vec!["v2"]);
}

#[test]
fn test_records_with_no_matchable_fields_never_match() {
    let engine = SearchEngine::with_corpus(Corpus {
        videos: vec![make_video("v1", "", &[])],
        ..Default::default()
    });
    assert!(engine.search_videos("anything", None).is_empty());
}
