//! Integration tests for the parser.

use ale_parser::ale::error::Section;
use ale_parser::ale::testing::{fixture, fixture_source};
use ale_parser::{parse_document, FieldValue, LoaderError, ParseError};
use rstest::rstest;

const HEADER: &str = "Heading\nFIELD_DELIM\tTABS\nVIDEO_FORMAT\tCUSTOM\nAUDIO_FORMAT\t48khz\nFPS\t24\n";

fn with_body(columns: &str, data: &str) -> String {
    format!("{HEADER}Column\n{columns}\nData\n{data}")
}

#[test]
fn test_minimal_fixture() {
    let doc = fixture("minimal.ale").parse().unwrap();

    assert_eq!(doc.columns(), ["Name", "Start"]);
    assert_eq!(doc.fps(), 24);
    assert_eq!(doc.clips().len(), 1);
    assert_eq!(doc.clips()[0].get("Name"), Some("A001"));
    assert_eq!(doc.clips()[0].get("Start"), Some("01:00:00:00"));
}

#[test]
fn test_full_heading_accessors() {
    let doc = fixture("reel_a.ale").parse().unwrap();

    assert_eq!(doc.video_format(), "1080");
    assert_eq!(doc.audio_format(), "48kHz");
    assert_eq!(doc.fps(), 25);
    assert_eq!(doc.film_format(), Some("35 mm"));
    assert_eq!(doc.tape(), Some("A001"));
    assert_eq!(doc.columns().len(), 7);
    assert_eq!(doc.clips().len(), 2);
    assert_eq!(doc.clips()[1].get("Take"), Some("2"));
}

#[test]
fn test_crlf_fixture_matches_lf() {
    let crlf = fixture("crlf.ale").parse().unwrap();
    let lf = parse_document(&fixture_source("crlf.ale").replace("\r\n", "\n")).unwrap();

    assert_eq!(crlf.columns(), lf.columns());
    assert_eq!(crlf.clips(), lf.clips());
    assert_eq!(crlf.clips()[1].get("Start"), Some("09:00:10:00"));
}

#[test]
fn test_raw_text_is_kept_verbatim() {
    let source = fixture_source("crlf.ale");
    let doc = parse_document(&source).unwrap();
    assert_eq!(doc.raw_text(), source);
}

#[test]
fn test_ragged_rows() {
    let doc = fixture("ragged_rows.ale").parse().unwrap();
    let clips = doc.clips();

    assert_eq!(clips.len(), 4);
    assert_eq!(clips[0].len(), 3);

    // Short row: trailing column simply absent.
    assert_eq!(clips[1].len(), 2);
    assert_eq!(clips[1].value("End"), FieldValue::Absent);

    // Long row: surplus values dropped.
    assert_eq!(clips[2].len(), 3);
    assert_eq!(clips[2].get("End"), Some("01:00:04:00"));

    // Leading empty field keeps the others aligned.
    assert_eq!(clips[3].value("Name"), FieldValue::Empty);
    assert_eq!(clips[3].get("Start"), Some("01:00:05:00"));
}

#[test]
fn test_duplicate_heading_key_last_wins() {
    let source = format!("{HEADER}FPS\t30\nColumn\nName\nData\nA001\n");
    let doc = parse_document(&source).unwrap();
    assert_eq!(doc.fps(), 30);
}

#[test]
fn test_duplicate_column_overwrites_value() {
    let doc = parse_document(&with_body("Name\tTape\tName", "A001\tT1\tA001_B\n")).unwrap();

    assert_eq!(doc.columns(), ["Name", "Tape", "Name"]);
    assert_eq!(doc.clips()[0].get("Name"), Some("A001_B"));
    assert_eq!(doc.clips()[0].len(), 2);
}

#[test]
fn test_blank_data_lines_are_skipped() {
    let doc = parse_document(&with_body("Name", "A001\n\n   \nA002\n")).unwrap();
    assert_eq!(doc.clips().len(), 2);
}

#[test]
fn test_data_row_named_like_a_label() {
    let doc = parse_document(&with_body("Name\tStart", "A001\t01:00:00:00\nData\t\nColumn\t\t\n")).unwrap();

    assert_eq!(doc.clips().len(), 3);
    assert_eq!(doc.clips()[1].get("Name"), Some("Data"));
    assert_eq!(doc.clips()[1].value("Start"), FieldValue::Empty);
    assert_eq!(doc.clips()[2].get("Name"), Some("Column"));
}

#[rstest]
#[case::plain("24", 24)]
#[case::padded(" 30 ", 30)]
#[case::negative("-1", -1)]
#[case::beyond_u32("5000000000", 5_000_000_000)]
fn test_integer_frame_rates(#[case] fps: &str, #[case] expected: i64) {
    let text = format!("Heading\nFIELD_DELIM\tTABS\nVIDEO_FORMAT\tCUSTOM\nAUDIO_FORMAT\t48khz\nFPS\t{fps}\nColumn\nName\nData\n");
    assert_eq!(parse_document(&text).unwrap().fps(), expected);
}

#[rstest]
#[case::no_heading(fixture_source("no_heading.ale"), ParseError::MissingOrMisorderedSection(Section::Heading))]
#[case::preamble(format!("notes\n{}", fixture_source("minimal.ale")), ParseError::MissingOrMisorderedSection(Section::Heading))]
#[case::no_column(format!("{HEADER}Data\nA001\n"), ParseError::MissingOrMisorderedSection(Section::Column))]
#[case::no_data(format!("{HEADER}Column\nName\n"), ParseError::MissingOrMisorderedSection(Section::Data))]
#[case::second_heading(format!("{}Heading\n", fixture_source("minimal.ale")), ParseError::UnexpectedSection(Section::Heading))]
#[case::bad_delimiter(fixture_source("bad_delimiter.ale"), ParseError::UnsupportedFieldDelimiter { found: Some("COMMAS".to_string()) })]
#[case::no_delimiter("Heading\nFPS\t24\nColumn\nName\nData\n".to_string(), ParseError::UnsupportedFieldDelimiter { found: None })]
#[case::malformed_heading(format!("{HEADER}TAPE A001\nColumn\nName\nData\n"), ParseError::MalformedHeadingLine { line: 5 })]
#[case::too_many_tabs(format!("{HEADER}\nTAPE\tA\tB\nColumn\nName\nData\n"), ParseError::MalformedHeadingLine { line: 6 })]
#[case::empty_columns(format!("{HEADER}Column\n\t\t\nData\n"), ParseError::EmptyColumnList)]
#[case::missing_audio("Heading\nFIELD_DELIM\tTABS\nVIDEO_FORMAT\tPAL\nFPS\t25\nColumn\nName\nData\n".to_string(), ParseError::MissingRequiredMetadata("AUDIO_FORMAT".to_string()))]
#[case::fractional_fps(fixture_source("fractional_fps.ale"), ParseError::InvalidFrameRate("23.976".to_string()))]
#[case::word_fps(format!("{HEADER}FPS\tfast\nColumn\nName\nData\n"), ParseError::InvalidFrameRate("fast".to_string()))]
fn test_parse_errors(#[case] source: String, #[case] expected: ParseError) {
    assert_eq!(parse_document(&source), Err(expected));
}

#[test]
fn test_error_messages() {
    let err = parse_document(&fixture_source("bad_delimiter.ale")).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Heading section: unsupported FIELD_DELIM 'COMMAS', only TABS is recognised");

    let err = parse_document(&format!("{HEADER}TAPE A001\nColumn\nName\nData\n")).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Heading section, line 5: expected KEY<TAB>VALUE");

    let err = parse_document(&fixture_source("no_heading.ale")).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"missing or misordered 'Heading' section");
}

#[test]
fn test_loader_reports_io_errors() {
    let result = ale_parser::ale::loader::DocumentLoader::from_path("does/not/exist.ale");
    assert!(matches!(result, Err(LoaderError::Io(_))));
}

#[test]
fn test_document_serializes_to_json() {
    let doc = fixture("minimal.ale").parse().unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["fps"], 24);
    assert_eq!(json["columns"][1], "Start");
    assert_eq!(json["clips"][0]["Name"], "A001");
    assert_eq!(json["metadata"][0][0], "VIDEO_FORMAT");
    assert!(json.get("raw_text").is_none());
}
