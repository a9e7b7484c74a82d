//! Tests for CSV output

use super::{write_catalog, write_rows};
use crate::catalog::{build_catalog, CatalogRow};
use crate::error::CatalogError;
use fab_common::CardRecord;

fn make_card(card_id: &str, name: &str, types: &[&str]) -> CardRecord {
    CardRecord {
        card_id: card_id.to_string(),
        name: name.to_string(),
        edition: "F".to_string(),
        foiling: "S".to_string(),
        pitch: "1".to_string(),
        cost: "2".to_string(),
        power: "6".to_string(),
        defense: "3".to_string(),
        rarity: "R".to_string(),
        image_url: format!("https://example.com/{card_id}.png"),
        types: types.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

fn render(rows: &[CatalogRow]) -> String {
    let mut out = Vec::new();
    write_rows(rows, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_write_rows_exact_output() {
    let rows = build_catalog(&[vec![
        make_card("WTR002", "Sabre", &["Action"]),
        make_card("WTR001", "Bravo, the Brash", &["Action", "Attack"]),
    ]]);

    assert_eq!(
        render(&rows),
        "WTR001.NF.1st,WTR001,\"Bravo, the Brash\",1,NF,1st,R,2,6,3,https://example.com/WTR001.png,Action,Attack\n\
         WTR002.NF.1st,WTR002,Sabre,1,NF,1st,R,2,6,3,https://example.com/WTR002.png,Action\n"
    );
}

#[test]
fn test_write_rows_no_header_single_trailing_newline() {
    let rows = build_catalog(&[vec![make_card("WTR001", "Sabre", &["Action"])]]);
    let out = render(&rows);

    assert!(out.starts_with("WTR001.NF.1st,"));
    assert!(out.ends_with(".png,Action\n"));
    assert!(!out.ends_with("\n\n"));
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_write_rows_does_not_escape_quotes() {
    let rows = build_catalog(&[vec![make_card("X001", "The \"Big\" One", &[])]]);
    let out = render(&rows);

    assert!(out.contains(",The \"Big\" One,"));
    assert!(out.ends_with(".png,\n"));
}

#[test]
fn test_write_rows_empty() {
    assert_eq!(render(&[]), "");
}

#[test]
fn test_write_catalog_creates_and_overwrites() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("cards.csv");
    std::fs::write(&path, "stale content that is longer than the new file\n".repeat(20)).unwrap();

    let rows = build_catalog(&[vec![make_card("WTR001", "Sabre", &["Action"])]]);
    write_catalog(&rows, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&rows));
}

#[test]
fn test_write_catalog_bad_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("no_such_dir").join("cards.csv");

    match write_catalog(&[], &path) {
        Err(err @ CatalogError::Write { .. }) => {
            assert_eq!(err.step(), "write");
            assert!(err.to_string().contains("cards.csv"));
        }
        other => panic!("Expected CatalogError::Write, got: {other:?}"),
    }
}
