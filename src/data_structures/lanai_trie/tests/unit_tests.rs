// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the Lanai Trie.

use std::collections::HashSet;

use test_case::test_case;

use crate::data_structures::lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError};

/// The trie used by most search tests.
fn greetings_trie(config: LanaiTrieConfig) -> LanaiTrie<i32> {
    let mut trie = LanaiTrie::with_config(config);
    trie.add("Hello World", 1);
    trie.add("World Best", 2);
    trie.add("Beer", 3);
    trie
}

fn search_values(trie: &LanaiTrie<i32>, keyword: &str) -> HashSet<i32> {
    trie.search(keyword).into_iter().map(|hit| *hit.value).collect()
}

#[test]
fn test_new_trie_is_empty() {
    let trie = LanaiTrie::<i32>::new();

    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert!(trie.config().ignore_casing());
    assert!(trie.get("").is_none());
    assert!(trie.search("").is_empty());
}

#[test]
fn test_add_and_get() {
    let mut trie = LanaiTrie::new();
    assert_eq!(trie.add("foo", 1), None);
    assert_eq!(trie.add("foobar", 2), None);
    assert_eq!(trie.add("BAR", 3), None);

    assert_eq!(trie.len(), 3);
    assert_eq!(trie.get("foo"), Some(&1));
    assert_eq!(trie.get("foobar"), Some(&2));
    assert_eq!(trie.get("bar"), Some(&3));
    assert_eq!(trie.get("BAR"), Some(&3));

    // Path exists but no key ends there
    assert_eq!(trie.get("fooba"), None);
    assert_eq!(trie.get("barfoo"), None);
    assert!(trie.contains_key("Foo"));
    assert!(!trie.contains_key("fo"));
}

#[test]
fn test_readd_overwrites_value_and_key() {
    let mut trie = LanaiTrie::new();
    trie.add("hello", 1);

    assert_eq!(trie.add("HELLO", 2), Some(1));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.get("hello"), Some(&2));

    let hits = trie.search("ell");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, "HELLO");
}

#[test]
fn test_empty_key_is_ignored() {
    let mut trie = LanaiTrie::new();

    assert_eq!(trie.add("", 7), None);
    assert!(trie.is_empty());
    assert_eq!(trie.get(""), None);
    assert!(trie.search("").is_empty());
}

#[test]
fn test_try_add_rejects_empty_key() {
    let mut trie = LanaiTrie::new();

    assert_eq!(trie.try_add("", 1), Err(LanaiTrieError::EmptyKey));
    assert_eq!(trie.try_add("key", 1), Ok(None));
    assert_eq!(trie.try_add("key", 2), Ok(Some(1)));
    assert_eq!(trie.len(), 1);
}

#[test_case("hello", &[1] ; "prefix of first key")]
#[test_case("world", &[1, 2] ; "suffix and prefix")]
#[test_case("lo", &[1] ; "inside first word")]
#[test_case("rl", &[1, 2] ; "inside both worlds")]
#[test_case("be", &[2, 3] ; "start of second word and of beer")]
#[test_case("lr", &[] ; "no match")]
#[test_case("o w", &[1] ; "across the space")]
#[test_case("HELLO WORLD", &[1] ; "whole key uppercase")]
#[test_case("", &[1, 2, 3] ; "empty keyword")]
fn test_search_ignoring_case(keyword: &str, expected: &[i32]) {
    let trie = greetings_trie(LanaiTrieConfig::default());
    let expected: HashSet<i32> = expected.iter().copied().collect();

    assert_eq!(search_values(&trie, keyword), expected);
}

#[test]
fn test_search_returns_original_keys() {
    let trie = greetings_trie(LanaiTrieConfig::default());
    let keys: Vec<&str> = trie.search("world").into_iter().map(|hit| hit.key).collect();

    assert_eq!(keys, vec!["Hello World", "World Best"]);
}

#[test]
fn test_case_sensitive_trie() {
    let trie = greetings_trie(LanaiTrieConfig::new().with_ignore_casing(false));

    assert_eq!(trie.get("hello world"), None);
    assert_eq!(trie.get("world best"), None);
    assert_eq!(trie.get("Hello World"), Some(&1));

    assert!(trie.search("hello").is_empty());
    assert!(trie.search("world").is_empty());
    assert!(trie.search("be").is_empty());

    assert_eq!(search_values(&trie, "World"), HashSet::from([1, 2]));
    assert_eq!(search_values(&trie, "e"), HashSet::from([1, 2, 3]));
}

#[test]
fn test_falsy_values_are_reported() {
    let mut trie = LanaiTrie::new();
    trie.add("zero", 0);
    trie.add("zeroth", 0);
    trie.add("none", -1);

    let hits = trie.search("zer");
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|hit| *hit.value == 0));
}

#[test]
fn test_equal_values_reported_per_key() {
    let mut trie = LanaiTrie::new();
    trie.add("alpha", "same");
    trie.add("beta", "same");

    let keys: Vec<&str> = trie.search("a").into_iter().map(|hit| hit.key).collect();
    assert_eq!(keys, vec!["alpha", "beta"]);
}

#[test]
fn test_overlapping_prefix_false_start() {
    let mut trie = LanaiTrie::new();
    trie.add("ab", 1);
    trie.add("aab", 2);
    trie.add("aaab", 3);
    trie.add("aa", 4);

    assert_eq!(search_values(&trie, "ab"), HashSet::from([1, 2, 3]));
    assert_eq!(search_values(&trie, "aab"), HashSet::from([2, 3]));
    assert_eq!(search_values(&trie, "aa"), HashSet::from([2, 3, 4]));
}

#[test]
fn test_nested_keys_all_match() {
    let mut trie = LanaiTrie::new();
    trie.add("foo", 1);
    trie.add("foobar", 2);
    trie.add("bar", 3);

    assert_eq!(search_values(&trie, "fo"), HashSet::from([1, 2]));
    assert_eq!(search_values(&trie, "ar"), HashSet::from([2, 3]));
    assert_eq!(search_values(&trie, "oob"), HashSet::from([2]));
}

#[test]
fn test_unicode_keys() {
    let mut trie = LanaiTrie::new();
    trie.add("Café Crème", 1);
    trie.add("ΣΟΦΙΑ", 2);

    assert_eq!(trie.get("CAFÉ CRÈME"), Some(&1));
    assert_eq!(search_values(&trie, "é cr"), HashSet::from([1]));
    assert_eq!(search_values(&trie, "σοφ"), HashSet::from([2]));
}

#[test]
fn test_iter_and_collect() {
    let trie: LanaiTrie<u8> = vec![("one", 1), ("two", 2), ("three", 3)]
        .into_iter()
        .collect();

    let entries: Vec<(&str, u8)> = trie.iter().map(|hit| (hit.key, *hit.value)).collect();
    assert_eq!(entries.len(), 3);
    assert!(entries.contains(&("one", 1)));
    assert!(entries.contains(&("two", 2)));
    assert!(entries.contains(&("three", 3)));
}

#[test]
fn test_extend_overwrites() {
    let mut trie = LanaiTrie::new();
    trie.extend([("k".to_string(), 1), ("K".to_string(), 2)]);

    assert_eq!(trie.len(), 1);
    assert_eq!(trie.get("k"), Some(&2));
}

#[test]
fn test_long_key_search() {
    let key = "ab".repeat(5_000) + "needle";
    let mut trie = LanaiTrie::new();
    trie.add(key.as_str(), 1);
    trie.add("needless", 2);

    assert_eq!(search_values(&trie, "needle"), HashSet::from([1, 2]));
    assert_eq!(search_values(&trie, "bneedle"), HashSet::from([1]));
}

#[test]
fn test_search_hit_serializes() {
    let trie = greetings_trie(LanaiTrieConfig::default());
    let hits = trie.search("beer");

    let json = serde_json::to_string(&hits).unwrap();
    assert_eq!(json, r#"[{"key":"Beer","value":3}]"#);
}
