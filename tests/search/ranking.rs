//! Ranking: best score first, corpus order on ties, same answer every time.

use super::common::{assert_ranked, ids, make_video, sample_engine};
use edusearch::{Corpus, EngineConfig, SearchEngine};

#[test]
fn test_exact_beats_misspelled() {
    let engine = SearchEngine::with_corpus(Corpus {
        videos: vec![
            make_video("v1", "Calculs", &[]),
            make_video("v2", "Calculus", &[]),
        ],
        ..Default::default()
    });
    let results = engine.search_videos("calculus", None);
    assert_eq!(ids(&results), vec!["v2", "v1"]);
    assert_eq!(results[0].score, 0.0);
}

#[test]
fn test_ties_keep_corpus_order() {
    let engine = SearchEngine::with_corpus(Corpus {
        videos: (0..6).map(|i| make_video(&format!("v{i}"), "Limits", &[])).collect(),
        ..Default::default()
    });
    let results = engine.search_videos("limits", None);
    assert_eq!(ids(&results), vec!["v0", "v1", "v2", "v3", "v4", "v5"]);
}

#[test]
fn test_absent_fields_are_not_penalized() {
    // v1 has a tag that misses; v2 has no tags at all. Both titles are exact.
    let engine = SearchEngine::with_corpus(Corpus {
        videos: vec![
            make_video("v1", "Calculus", &["biology"]),
            make_video("v2", "Calculus", &[]),
        ],
        ..Default::default()
    });
    let results = engine.search_videos("calculus", None);
    assert_eq!(ids(&results), vec!["v2", "v1"]);
    assert_eq!(results[0].score, 0.0);
    // title 0.0 at 0.4, tags 1.0 at 0.2, renormalized over 0.6
    assert!((results[1].score - 0.2 / 0.6).abs() < 1e-12);
}

#[test]
fn test_weight_override_changes_order() {
    let corpus = Corpus {
        videos: vec![
            make_video("v1", "Calculus", &["xyz"]),
            make_video("v2", "Unrelated", &["calculus"]),
        ],
        ..Default::default()
    };

    let default = SearchEngine::with_corpus(corpus.clone());
    assert_eq!(ids(&default.search_videos("calculus", None)), vec!["v1", "v2"]);

    let config = EngineConfig::from_json_str(r#"{"weights": {"videos": {"title": 0.1, "tags": 0.9}}}"#)
        .unwrap();
    let tag_heavy = SearchEngine::new(config).unwrap();
    tag_heavy.initialize(corpus);
    // v1's tag miss now outweighs its title hit
    assert_eq!(ids(&tag_heavy.search_videos("calculus", None)), vec!["v2", "v1"]);
}

#[test]
fn test_every_kind_is_sorted() {
    let engine = sample_engine();
    for query in ["calculus", "biology", "linear", "ada"] {
        assert_ranked(&engine.search_videos(query, None));
        assert_ranked(&engine.search_courses(query, None));
        assert_ranked(&engine.search_teachers(query, None));
        assert_ranked(&engine.search_communities(query, None));
    }
}

#[test]
fn test_repeated_search_is_identical() {
    let engine = sample_engine();
    for query in ["calculus", "algebra", "cell", "lovelace"] {
        assert_eq!(engine.search_videos(query, None), engine.search_videos(query, None));
        assert_eq!(engine.global_search(query), engine.global_search(query));
    }
}
