//! Global search: four kinds, joined, capped per kind.

use std::sync::Arc;

use super::common::{assert_ranked, math_corpus, sample_engine};
use edusearch::{EngineConfig, SearchEngine};

#[test]
fn test_caps_are_asymmetric() {
    let engine = SearchEngine::with_corpus(math_corpus(15, 7, 2, 0));
    let response = engine.global_search("math");

    assert_eq!(response.videos.len(), 10);
    assert_eq!(response.courses.len(), 5);
    assert_eq!(response.teachers.len(), 2);
    assert_eq!(response.communities.len(), 0);

    assert_ranked(&response.videos);
    assert_ranked(&response.courses);
    assert_ranked(&response.teachers);
}

#[test]
fn test_caps_keep_the_best() {
    let engine = SearchEngine::with_corpus(math_corpus(15, 0, 0, 0));
    let capped = engine.global_search("math").videos;
    let full = engine.search_videos("math", None);

    assert_eq!(full.len(), 15);
    assert_eq!(capped[..], full[..10]);
}

#[test]
fn test_caps_come_from_config() {
    let config = EngineConfig::from_json_str(r#"{"caps": {"videos": 3, "teachers": 1}}"#).unwrap();
    let engine = SearchEngine::new(config).unwrap();
    engine.initialize(math_corpus(8, 8, 8, 8));

    let response = engine.global_search("math");
    assert_eq!(response.videos.len(), 3);
    assert_eq!(response.courses.len(), 5);
    assert_eq!(response.teachers.len(), 1);
    assert_eq!(response.communities.len(), 5);
}

#[test]
fn test_global_search_matches_unfiltered_entity_search() {
    let engine = sample_engine();
    let response = engine.global_search("calculus");
    let videos = engine.search_videos("calculus", None);
    let communities = engine.search_communities("calculus", None);

    assert_eq!(response.videos, videos);
    assert_eq!(response.communities, communities);
    assert!(!response.communities.is_empty());
}

#[test]
fn test_response_serializes_grouped() {
    let engine = sample_engine();
    let json = serde_json::to_value(engine.global_search("calculus")).unwrap();
    assert!(json["videos"].is_array());
    assert!(json["teachers"].is_array());
    assert_eq!(json["videos"][0]["id"], "v1");
    assert!(json["videos"][0]["score"].is_number());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_async_global_search() {
    let engine = Arc::new(SearchEngine::with_corpus(math_corpus(12, 1, 1, 1)));
    let response = Arc::clone(&engine).global_search_async("math".to_string()).await;
    assert_eq!(response.videos.len(), 10);
    assert_eq!(response, engine.global_search("math"));
}
