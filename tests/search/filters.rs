//! Post-filters: conjunctive, never re-scoring, lenient with bad input.

use super::common::{ids, make_course, make_teacher, make_video, make_video_by, sample_engine};
use edusearch::{
    CommunityFilter, Corpus, Course, CourseFilter, PriceRange, SearchEngine, TeacherFilter,
    VideoFilter,
};

fn course(id: &str, category: &str, level: &str, price: Option<f64>) -> Course {
    Course {
        category: Some(category.to_string()),
        level: Some(level.to_string()),
        ..make_course(id, "Calculus", price)
    }
}

fn course_engine() -> SearchEngine {
    SearchEngine::with_corpus(Corpus {
        courses: vec![
            course("c1", "Mathematics", "beginner", Some(0.0)),
            course("c2", "Mathematics", "advanced", Some(49.99)),
            course("c3", "Physics", "beginner", Some(19.0)),
            course("c4", "Mathematics", "beginner", None),
        ],
        ..Default::default()
    })
}

#[test]
fn test_course_filters_are_conjunctive() {
    let engine = course_engine();
    let filter = CourseFilter {
        category: Some("Mathematics".to_string()),
        level: Some("beginner".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&engine.search_courses("calculus", Some(&filter))), vec!["c1", "c4"]);

    let filter = CourseFilter {
        price_range: Some(PriceRange::new(10.0, 50.0)),
        ..filter
    };
    assert!(engine.search_courses("calculus", Some(&filter)).is_empty());
}

#[test]
fn test_price_range_is_inclusive_and_skips_unpriced() {
    let engine = course_engine();
    let filter = CourseFilter {
        price_range: Some(PriceRange::new(19.0, 49.99)),
        ..Default::default()
    };
    assert_eq!(ids(&engine.search_courses("calculus", Some(&filter))), vec!["c2", "c3"]);
}

#[test]
fn test_invalid_price_range_is_ignored() {
    let engine = course_engine();
    let unfiltered = engine.search_courses("calculus", None);

    for range in [PriceRange::new(50.0, 10.0), PriceRange::new(f64::NAN, 10.0)] {
        let filter = CourseFilter {
            price_range: Some(range),
            ..Default::default()
        };
        assert_eq!(engine.search_courses("calculus", Some(&filter)), unfiltered);
    }
}

#[test]
fn test_non_numeric_price_range_from_json_is_ignored() {
    let engine = course_engine();
    let filter: CourseFilter =
        serde_json::from_str(r#"{"priceRange": ["cheap", "expensive"], "level": "advanced"}"#)
            .unwrap();
    assert!(filter.price_range.is_none());
    assert_eq!(ids(&engine.search_courses("calculus", Some(&filter))), vec!["c2"]);

    let filter: CourseFilter = serde_json::from_str(r#"{"priceRange": ["0", "20"]}"#).unwrap();
    assert_eq!(ids(&engine.search_courses("calculus", Some(&filter))), vec!["c1", "c3"]);
}

#[test]
fn test_blank_filter_values_are_not_applied() {
    let engine = course_engine();
    let filter = CourseFilter {
        category: Some(String::new()),
        level: Some("   ".to_string()),
        ..Default::default()
    };
    assert_eq!(engine.search_courses("calculus", Some(&filter)).len(), 4);
}

#[test]
fn test_video_author_substring_is_case_insensitive() {
    let engine = SearchEngine::with_corpus(Corpus {
        videos: vec![
            make_video_by("v1", "Limits", "Ada Lovelace"),
            make_video_by("v2", "Limits", "Grace Hopper"),
            make_video("v3", "Limits", &[]),
        ],
        ..Default::default()
    });
    let filter = VideoFilter {
        author: Some("LOVE".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&engine.search_videos("limits", Some(&filter))), vec!["v1"]);
}

#[test]
fn test_teacher_subject_is_membership() {
    let engine = SearchEngine::with_corpus(Corpus {
        users: vec![
            make_teacher("t1", "Ada Lovelace", &["Math", "Computing"]),
            make_teacher("t2", "Ada Yonath", &["Chemistry"]),
        ],
        ..Default::default()
    });
    let filter = TeacherFilter {
        subject: Some("Computing".to_string()),
    };
    assert_eq!(ids(&engine.search_teachers("ada", Some(&filter))), vec!["t1"]);

    // Membership, not substring
    let filter = TeacherFilter {
        subject: Some("Comp".to_string()),
    };
    assert!(engine.search_teachers("ada", Some(&filter)).is_empty());
}

#[test]
fn test_filter_keeps_scores() {
    let engine = sample_engine();
    let unfiltered = engine.search_communities("study group", None);
    let filter = CommunityFilter {
        category: Some("Mathematics".to_string()),
    };
    let filtered = engine.search_communities("study group", Some(&filter));

    assert!(!filtered.is_empty());
    for result in &filtered {
        let original = unfiltered
            .iter()
            .find(|r| r.record.id == result.record.id)
            .unwrap();
        assert_eq!(result.score, original.score);
    }
}
