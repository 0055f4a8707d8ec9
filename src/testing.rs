//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::types::{Community, Corpus, Course, Note, Person, Teacher, Video};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Create a video with a title and tags.
pub fn make_video(id: &str, title: &str, tags: &[&str]) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        tags: strings(tags),
        author: None,
        category: None,
        thumbnail: None,
        duration_secs: None,
        views: 0,
    }
}

/// Create a video with an author.
pub fn make_video_by(id: &str, title: &str, author: &str) -> Video {
    Video {
        author: Some(Person {
            id: None,
            name: author.to_string(),
        }),
        ..make_video(id, title, &[])
    }
}

/// Create a course with an optional price.
pub fn make_course(id: &str, title: &str, price: Option<f64>) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        tags: vec![],
        instructor: None,
        category: None,
        level: None,
        price,
        thumbnail: None,
    }
}

/// Create a teacher profile.
pub fn make_teacher(id: &str, name: &str, subjects: &[&str]) -> Teacher {
    Teacher {
        id: id.to_string(),
        name: name.to_string(),
        bio: String::new(),
        subjects: strings(subjects),
        avatar: None,
    }
}

/// Create a community with an optional category.
pub fn make_community(id: &str, name: &str, category: Option<&str>) -> Community {
    Community {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        tags: vec![],
        category: category.map(str::to_string),
        member_count: 0,
    }
}

/// Create a personal note.
pub fn make_note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: vec![],
        video_id: None,
    }
}

/// A small mixed corpus used by examples and smoke tests.
pub fn sample_corpus() -> Corpus {
    Corpus {
        videos: vec![
            Video {
                description: "What a limit is, and how derivatives follow from it.".to_string(),
                author: Some(Person {
                    id: Some("u1".to_string()),
                    name: "Ada Lovelace".to_string(),
                }),
                category: Some("Mathematics".to_string()),
                ..make_video(
                    "v1",
                    "Introduction to Calculus: Limits and Derivatives",
                    &["calculus", "limits", "derivatives"],
                )
            },
            Video {
                description: "Vectors, matrices and linear maps.".to_string(),
                category: Some("Mathematics".to_string()),
                ..make_video_by("v2", "Linear Algebra Crash Course", "Grace Hopper")
            },
            Video {
                description: "Cells, membranes and organelles.".to_string(),
                category: Some("Science".to_string()),
                ..make_video("v3", "Cell Biology Basics", &["biology", "cells"])
            },
        ],
        courses: vec![
            Course {
                category: Some("Mathematics".to_string()),
                level: Some("beginner".to_string()),
                ..make_course("c1", "Linear Algebra Fundamentals", Some(0.0))
            },
            Course {
                category: Some("Mathematics".to_string()),
                level: Some("advanced".to_string()),
                ..make_course("c2", "Complete Calculus Mastery", Some(49.99))
            },
        ],
        users: vec![
            Teacher {
                bio: "Teaches calculus and analysis.".to_string(),
                ..make_teacher("t1", "Ada Lovelace", &["Math", "Computing"])
            },
            make_teacher("t2", "Rosalind Franklin", &["Biology", "Chemistry"]),
        ],
        communities: vec![
            make_community("g1", "Calculus Study Group", Some("Mathematics")),
            make_community("g2", "Biology Lab Chat", Some("Science")),
        ],
    }
}
