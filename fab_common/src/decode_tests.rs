//! Tests for dataset decoding

use crate::decode::decode_cards;
use crate::error::DecodeError;
use serde_json::json;

fn dataset(cards: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&cards).unwrap()
}

#[test]
fn test_decode_array_of_cards() {
    let bytes = dataset(json!([
        {"id": "WTR001", "name": "Rhinar, Reckless Rampage", "edition": "A", "foiling": "R", "types": ["Brute", "Hero"]},
        {"id": "WTR100", "name": "Sink Below", "edition": "U", "foiling": "S", "pitch": "3"}
    ]));

    let cards = decode_cards(&bytes).unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].card_id, "WTR001");
    assert_eq!(cards[1].pitch, "3");
}

#[test]
fn test_decode_preserves_input_order() {
    let bytes = dataset(json!([
        {"id": "B", "name": "Zeta", "edition": "N", "foiling": "S"},
        {"id": "A", "name": "Alpha", "edition": "N", "foiling": "S"}
    ]));

    let cards = decode_cards(&bytes).unwrap();
    let ids: Vec<&str> = cards.iter().map(|c| c.card_id.as_str()).collect();
    assert_eq!(ids, vec!["B", "A"]);
}

#[test]
fn test_decode_empty_array() {
    let cards = decode_cards(b"[]").unwrap();
    assert!(cards.is_empty());
}

#[test]
fn test_decode_root_object_is_error() {
    let bytes = dataset(json!({"id": "WTR001", "name": "Rhinar", "edition": "A", "foiling": "S"}));

    match decode_cards(&bytes) {
        Err(DecodeError::NotAnArray { found }) => assert_eq!(found, "object"),
        other => panic!("Expected DecodeError::NotAnArray, got: {other:?}"),
    }
}

#[test]
fn test_decode_invalid_json_is_error() {
    match decode_cards(b"[{\"id\": \"WTR001\",") {
        Err(DecodeError::Syntax(_)) => {}
        other => panic!("Expected DecodeError::Syntax, got: {other:?}"),
    }
}

#[test]
fn test_decode_element_not_object() {
    let bytes = dataset(json!([
        {"id": "WTR001", "name": "Rhinar", "edition": "A", "foiling": "S"},
        ["WTR002", "Bone Head Barrier", "A", "S"]
    ]));

    match decode_cards(&bytes) {
        Err(DecodeError::NotAnObject { index, found }) => {
            assert_eq!(index, 1);
            assert_eq!(found, "array");
        }
        other => panic!("Expected DecodeError::NotAnObject, got: {other:?}"),
    }
}

#[test]
fn test_decode_missing_required_field_reports_index() {
    let bytes = dataset(json!([
        {"id": "WTR001", "name": "Rhinar", "edition": "A", "foiling": "S"},
        {"id": "WTR002", "name": "Bone Head Barrier", "foiling": "S"}
    ]));

    let err = decode_cards(&bytes).unwrap_err();
    match &err {
        DecodeError::Record { index, .. } => assert_eq!(*index, 1),
        other => panic!("Expected DecodeError::Record, got: {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("card #1"));
    assert!(message.contains("edition"));
}

#[test]
fn test_decode_empty_image_url_is_fine() {
    let bytes = dataset(json!([
        {"id": "WTR001", "name": "Rhinar", "edition": "A", "foiling": "S", "image_url": ""}
    ]));

    let cards = decode_cards(&bytes).unwrap();
    assert_eq!(cards[0].image_url, "");
}
