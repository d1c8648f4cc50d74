//! End-to-end: sample documents through a batch and out of each format.

use ale_babel::{FormatError, FormatRegistry};
use ale_parser::ale::projection::run_batch;
use ale_parser::ale::testing::fixture_source;
use ale_parser::{MappingBuilder, MappingPolicy, Table};
use rstest::rstest;

fn table(names: &[&str], mapping: MappingBuilder) -> Table {
    let sources: Vec<_> = names
        .iter()
        .map(|name| (name.to_string(), fixture_source(name)))
        .collect();
    run_batch(sources, mapping).unwrap().table
}

#[test]
fn test_minimal_document_to_csv() {
    let table = table(&["minimal.ale"], MappingBuilder::auto(MappingPolicy::default()));
    let output = FormatRegistry::default().serialize(&table, "csv").unwrap();

    assert_eq!(output, "Name,Start\nA001,01:00:00:00\n");
}

#[test]
fn test_union_of_two_reels_to_csv() {
    let table = table(
        &["reel_a.ale", "reel_b.ale"],
        MappingBuilder::auto(MappingPolicy::UnionAcrossDocuments),
    );
    let output = FormatRegistry::default().serialize(&table, "csv").unwrap();
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines[0], "Name,Tracks,Start,End,Tape,Scene,Take,Camroll");
    assert_eq!(
        lines[1],
        "A001C001_230101_R1AB,V,10:00:00:00,10:00:12:10,A001,12,1,"
    );
    assert_eq!(lines.len(), 4);
    assert!(lines[3].starts_with("B001C001_230102_R2CD,,"));
    assert!(lines[3].ends_with(",B001"));
}

#[test]
fn test_explicit_mapping_to_json() {
    let mapping = MappingBuilder::explicit(["Name:clip", "Camroll:roll"]).unwrap();
    let table = table(&["reel_a.ale", "reel_b.ale"], mapping);
    let output = FormatRegistry::default().serialize(&table, "json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["columns"], serde_json::json!(["clip", "roll"]));
    assert_eq!(value["rows"][0][1], serde_json::Value::Null);
    assert_eq!(value["rows"][2][1], "B001");
}

#[rstest]
#[case::csv("csv", "csv")]
#[case::json("json", "json")]
fn test_default_formats_registered(#[case] name: &str, #[case] extension: &str) {
    let registry = FormatRegistry::with_defaults();
    let format = registry.get(name).unwrap();

    assert_eq!(format.name(), name);
    assert_eq!(format.file_extension(), extension);
    assert!(!format.description().is_empty());
}

#[test]
fn test_unknown_format() {
    let err = FormatRegistry::default()
        .serialize(&Table::default(), "xml")
        .unwrap_err();

    assert!(matches!(err, FormatError::FormatNotFound(ref name) if name == "xml"));
    assert_eq!(err.to_string(), "Format 'xml' not found");
}
