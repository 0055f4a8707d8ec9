//! Shared proptest strategies.

use proptest::prelude::*;

use edusearch::{Course, Video};

/// A lowercase ASCII word. Normalization leaves it unchanged.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

/// A few words joined by single spaces.
pub fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..5).prop_map(|words| words.join(" "))
}

/// A query: a word, sometimes with a typo-like mutation applied.
pub fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        word(),
        (word(), any::<prop::sample::Index>()).prop_map(|(w, i)| {
            let mut chars: Vec<char> = w.chars().collect();
            chars.remove(i.index(chars.len()));
            chars.into_iter().collect()
        }),
    ]
}

/// A video with a title, optional description and a few tags.
pub fn video() -> impl Strategy<Value = (String, String, Vec<String>)> {
    (
        phrase(),
        prop_oneof![Just(String::new()), phrase()],
        prop::collection::vec(word(), 0..3),
    )
}

pub fn videos() -> impl Strategy<Value = Vec<Video>> {
    prop::collection::vec(video(), 0..20).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (title, description, tags))| Video {
                id: format!("v{i}"),
                title,
                description,
                tags,
                ..Default::default()
            })
            .collect()
    })
}

fn category() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Mathematics".to_string())),
        Just(Some("Science".to_string())),
    ]
}

fn level() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("beginner".to_string())),
        Just(Some("advanced".to_string())),
    ]
}

fn price() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (0u32..100).prop_map(|p| Some(f64::from(p)))]
}

pub fn courses() -> impl Strategy<Value = Vec<Course>> {
    prop::collection::vec((phrase(), category(), level(), price()), 0..20).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (title, category, level, price))| Course {
                id: format!("c{i}"),
                title,
                category,
                level,
                price,
                ..Default::default()
            })
            .collect()
    })
}
