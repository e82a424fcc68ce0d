//! End-to-end tests over the core pipeline: analyze -> store -> interpret
//! free text -> filter. No HTTP involved; the server crate has its own
//! integration suite.

use stringprops::{analyze, parse_query, StoreError, StringFilters, StringStore};

#[test]
fn analysis_feeds_storage_identity() {
    let store = StringStore::new();
    let record = store.insert("Race car").expect("new entry");

    // The stored id is exactly the analyzer's fingerprint.
    assert_eq!(record.id, analyze("Race car").sha256_hex);
    assert_eq!(store.get("Race car").expect("present").id, record.id);

    // Deduplication is fingerprint-based.
    assert_eq!(
        store.insert("Race car"),
        Err(StoreError::Duplicate(record.id))
    );
}

#[test]
fn natural_language_round_trip() {
    let store = StringStore::new();
    for value in [
        "Race car",
        "level",
        "hello world",
        "a",
        "step on no pets",
        "two words",
    ] {
        store.insert(value).expect("new entry");
    }

    let filters = parse_query("two word palindromes").expect("consistent query");
    assert_eq!(
        filters,
        StringFilters {
            is_palindrome: Some(true),
            word_count: Some(2),
            ..Default::default()
        }
    );

    let hits = store.filter(&filters);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].value, "Race car");
}

#[test]
fn explicit_and_parsed_filters_agree() {
    let store = StringStore::new();
    for value in ["abcdefghijkl", "short", "also short"] {
        store.insert(value).expect("new entry");
    }

    let parsed = parse_query("longer than 10 characters").expect("consistent query");
    let explicit = StringFilters {
        min_length: Some(11),
        ..Default::default()
    };
    assert_eq!(parsed, explicit);
    assert_eq!(store.filter(&parsed), store.filter(&explicit));
    assert_eq!(store.filter(&parsed).len(), 1);
}

#[test]
fn serialized_record_is_a_flat_envelope() {
    let store = StringStore::new();
    let record = store.insert("a a").expect("new entry");

    let json = serde_json::to_value(&record).expect("serializes");
    assert_eq!(json["value"], "a a");
    assert_eq!(json["properties"]["length"], 3);
    assert_eq!(json["properties"]["word_count"], 2);
    assert_eq!(json["properties"]["character_frequency_map"], serde_json::json!({ "a": 2 }));
    assert!(json["created_at"].is_string());
}
