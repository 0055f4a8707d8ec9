//! Shared test utilities and fixtures.

#![allow(dead_code)]

use edusearch::{Community, Corpus, Course, Scored, SearchEngine, Teacher, Video};

// Re-export canonical fixture builders from edusearch::testing
pub use edusearch::testing::{
    make_community, make_course, make_note, make_teacher, make_video, make_video_by,
    sample_corpus,
};

/// Records that carry a stable id.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Video {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Teacher {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Community {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for edusearch::Note {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Result ids in rank order.
pub fn ids<T: HasId>(results: &[Scored<T>]) -> Vec<&str> {
    results.iter().map(|r| r.record.id()).collect()
}

/// Assert scores never decrease down the list.
pub fn assert_ranked<T>(results: &[Scored<T>]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score <= pair[1].score,
            "results out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }
}

/// An engine loaded with [`sample_corpus`].
pub fn sample_engine() -> SearchEngine {
    SearchEngine::with_corpus(sample_corpus())
}

/// A corpus with `n` matching records per kind for the query "math",
/// plus one record per kind that never matches it.
pub fn math_corpus(videos: usize, courses: usize, teachers: usize, communities: usize) -> Corpus {
    let mut corpus = Corpus {
        videos: (0..videos)
            .map(|i| make_video(&format!("v{i}"), &format!("Math lesson {i}"), &[]))
            .collect(),
        courses: (0..courses)
            .map(|i| make_course(&format!("c{i}"), &format!("Discrete Math {i}"), None))
            .collect(),
        users: (0..teachers)
            .map(|i| make_teacher(&format!("t{i}"), &format!("Teacher {i}"), &["Math"]))
            .collect(),
        communities: (0..communities)
            .map(|i| make_community(&format!("g{i}"), &format!("Math club {i}"), None))
            .collect(),
    };

    corpus.videos.push(make_video("v-bio", "Cell Biology Basics", &["biology"]));
    corpus.courses.push(make_course("c-poetry", "Poetry Workshop", None));
    corpus.users.push(make_teacher("t-bio", "Rosalind Franklin", &["Biology"]));
    corpus.communities.push(make_community("g-poetry", "Poetry Club", None));
    corpus
}
