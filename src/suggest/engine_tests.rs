//! Tests for the suggestion engine

use super::*;
use crate::suggest::matcher_fn;
use crate::test_utils::test_helpers::{ScriptedMatcher, candidates};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_tokens_increase_and_latest_is_current() {
    let mut engine = SuggestionEngine::new(ScriptedMatcher::new());
    let a = engine.request("a", &[]);
    let b = engine.request("ab", &[]);

    assert!(b > a);
    assert_eq!(engine.current_token(), Some(b));
    assert!(engine.is_in_flight());
    assert!(engine.has_pending());
}

#[test]
fn test_accept_current_clears_in_flight() {
    let mut engine = SuggestionEngine::new(ScriptedMatcher::new());
    let token = engine.request("a", &[]);

    let accepted = engine.accept(MatchResolution {
        token,
        entries: vec!["apple".into()],
    });

    assert_eq!(accepted, Some(candidates(&["apple"])));
    assert!(!engine.is_in_flight());
}

#[test]
fn test_accept_stale_is_discarded() {
    let mut engine = SuggestionEngine::new(ScriptedMatcher::new());
    let stale = engine.request("a", &[]);
    let _current = engine.request("ab", &[]);

    let accepted = engine.accept(MatchResolution {
        token: stale,
        entries: vec!["apple".into()],
    });

    assert!(accepted.is_none());
    assert!(engine.is_in_flight());
}

#[test]
fn test_next_resolution_with_nothing_pending() {
    let mut engine = SuggestionEngine::new(ScriptedMatcher::new());
    let resolution = futures::executor::block_on(engine.next_resolution());
    assert!(resolution.is_none());
}

#[tokio::test]
async fn test_older_request_finishing_last_is_dropped() {
    let matcher = ScriptedMatcher::new();
    let mut engine = SuggestionEngine::new(matcher.clone());

    let token_a = engine.request("a", &[]);
    let token_b = engine.request("ab", &[]);
    assert_eq!(matcher.input_of(0), "a");
    assert_eq!(matcher.input_of(1), "ab");

    // B finishes first
    matcher.resolve(1, ["abacus"]);
    let first = engine.next_resolution().await.unwrap();
    assert_eq!(first.token, token_b);
    assert_eq!(engine.accept(first), Some(candidates(&["abacus"])));

    // A finishes afterwards and must not win
    matcher.resolve(0, ["apple", "avocado"]);
    let second = engine.next_resolution().await.unwrap();
    assert_eq!(second.token, token_a);
    assert!(engine.accept(second).is_none());
    assert!(!engine.has_pending());
}

#[tokio::test]
async fn test_older_request_finishing_first_is_dropped() {
    let matcher = ScriptedMatcher::new();
    let mut engine = SuggestionEngine::new(matcher.clone());

    engine.request("a", &[]);
    let token_b = engine.request("ab", &[]);

    matcher.resolve(0, ["apple"]);
    let first = engine.next_resolution().await.unwrap();
    assert!(engine.accept(first).is_none());
    assert!(engine.is_in_flight());

    matcher.resolve(1, ["abacus"]);
    let second = engine.next_resolution().await.unwrap();
    assert_eq!(second.token, token_b);
    assert!(engine.accept(second).is_some());
    assert!(!engine.is_in_flight());
}

#[tokio::test]
async fn test_closure_matcher_receives_input_and_choices() {
    let mut engine = SuggestionEngine::new(matcher_fn(|input: &str, choices: &[Candidate]| {
        let picked: Vec<RawChoice> = choices
            .iter()
            .filter(|c| c.title.contains(input))
            .cloned()
            .map(RawChoice::from)
            .collect();
        async move { picked }
    }));

    let choices = candidates(&["red", "green", "blue"]);
    engine.request("re", &choices);
    let resolution = engine.next_resolution().await.unwrap();
    let accepted = engine.accept(resolution).unwrap();

    assert_eq!(accepted, candidates(&["red", "green"]));
}

#[tokio::test]
async fn test_results_are_normalized() {
    let mut engine = SuggestionEngine::new(matcher_fn(|_: &str, _: &[Candidate]| async {
        vec![RawChoice::from(json!({"title": "Red", "disabled": true}))]
    }));

    engine.request("", &[]);
    let resolution = engine.next_resolution().await.unwrap();
    let accepted = engine.accept(resolution).unwrap();

    assert_eq!(accepted[0].value, json!("Red"));
    assert!(accepted[0].disabled);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Whatever order the matcher calls finish in, only the last issued
    // request's result is accepted
    #[test]
    fn prop_only_latest_request_is_accepted(
        order in Just((0..6usize).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let matcher = ScriptedMatcher::new();
        let mut engine = SuggestionEngine::new(matcher.clone());
        let tokens: Vec<RequestToken> = (0..6)
            .map(|i| engine.request(&format!("q{i}"), &[]))
            .collect();

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let mut accepted = Vec::new();
        for call in order {
            matcher.resolve(call, [format!("r{call}")]);
            let resolution = runtime.block_on(engine.next_resolution()).unwrap();
            let token = resolution.token;
            if engine.accept(resolution).is_some() {
                accepted.push(token);
            }
        }

        prop_assert_eq!(accepted, vec![tokens[5]]);
        prop_assert!(!engine.is_in_flight());
    }
}
