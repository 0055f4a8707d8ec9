//! End-to-end matching scenarios against small hand-built corpora.

use super::common::{ids, make_course, make_note, make_video, sample_engine};
use edusearch::{Corpus, CourseFilter, PriceRange, SearchEngine};

#[test]
fn test_misspelled_query_still_finds_video() {
    let engine = SearchEngine::with_corpus(Corpus {
        videos: vec![make_video(
            "v1",
            "Introduction to Calculus — Limits and Derivatives",
            &["calculus", "limits", "derivatives"],
        )],
        ..Default::default()
    });

    let results = engine.search_videos("calculs", None);
    assert_eq!(ids(&results), vec!["v1"]);
    assert!(results[0].score > 0.0, "a misspelling is never a perfect match");
}

#[test]
fn test_free_course_price_filter() {
    let engine = SearchEngine::with_corpus(Corpus {
        courses: vec![
            make_course("c1", "Linear Algebra Fundamentals", Some(0.0)),
            make_course("c2", "Complete Calculus Mastery", Some(49.99)),
        ],
        ..Default::default()
    });

    let filter = CourseFilter {
        price_range: Some(PriceRange::new(0.0, 0.0)),
        ..Default::default()
    };
    let results = engine.search_courses("algebra", Some(&filter));
    assert_eq!(ids(&results), vec!["c1"]);
}

#[test]
fn test_transposed_letters_match() {
    let engine = sample_engine();
    let results = engine.search_courses("algerba", None);
    assert_eq!(ids(&results), vec!["c1"]);
}

#[test]
fn test_unrelated_query_finds_nothing() {
    let engine = sample_engine();
    assert!(engine.search_videos("xylophone", None).is_empty());
    assert!(engine.search_teachers("xylophone", None).is_empty());
}

#[test]
fn test_teacher_found_by_subject() {
    let engine = sample_engine();
    let results = engine.search_teachers("chemistry", None);
    assert_eq!(ids(&results), vec!["t2"]);
}

#[test]
fn test_video_found_by_author_name() {
    let engine = sample_engine();
    let results = engine.search_videos("grace hopper", None);
    assert_eq!(ids(&results), vec!["v2"]);
}

#[test]
fn test_case_is_ignored() {
    let engine = sample_engine();
    assert_eq!(
        engine.search_communities("CALCULUS STUDY", None),
        engine.search_communities("calculus study", None)
    );
}

#[test]
fn test_notes_use_their_own_corpus() {
    let engine = sample_engine();
    let notes = vec![
        make_note("n1", "Limits recap", "epsilon delta definition"),
        make_note("n2", "Matrix tricks", "row reduction"),
    ];

    let results = engine.search_notes(&notes, "epsilon");
    assert_eq!(ids(&results), vec!["n1"]);

    // Notes never leak into the global indexes
    assert!(engine.global_search("epsilon").is_empty());
}

#[test]
fn test_teachers_load_from_users() {
    let corpus: Corpus = serde_json::from_str(
        r#"{"users": [{"id": "t9", "name": "Emmy Noether", "subjects": ["Algebra"]}]}"#,
    )
    .unwrap();
    let engine = SearchEngine::with_corpus(corpus);
    assert_eq!(ids(&engine.search_teachers("noether", None)), vec!["t9"]);
    assert_eq!(engine.teachers().len(), 1);
}
