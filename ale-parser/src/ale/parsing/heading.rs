//! Heading section
//!
//! Every non-blank heading line is `KEY<TAB>VALUE`. The `FIELD_DELIM` line is checked
//! before anything else and is not copied into the metadata.

use crate::ale::document::Metadata;
use crate::ale::error::ParseError;
use crate::ale::{FIELD_DELIM, TABS};

/// Parse a heading body (blank lines at both ends already trimmed).
///
/// Line numbers in errors are 1-based within the body, blank lines counted.
pub(crate) fn parse_heading(body: &str) -> Result<Metadata, ParseError> {
    check_field_delimiter(body)?;

    let mut metadata = Metadata::new();
    for (index, line) in body.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) =
            split_pair(line).ok_or(ParseError::MalformedHeadingLine { line: index + 1 })?;
        if key == FIELD_DELIM {
            check_delimiter_value(value)?;
            continue;
        }
        metadata.insert(key, value);
    }

    Ok(metadata)
}

/// Find the first `FIELD_DELIM` line and require it to declare `TABS`.
fn check_field_delimiter(body: &str) -> Result<(), ParseError> {
    let declaration = body
        .split('\n')
        .find_map(|line| line.split_once('\t').filter(|(key, _)| *key == FIELD_DELIM));

    match declaration {
        Some((_, value)) => check_delimiter_value(value),
        None => Err(ParseError::UnsupportedFieldDelimiter { found: None }),
    }
}

fn check_delimiter_value(value: &str) -> Result<(), ParseError> {
    if value.trim() == TABS {
        Ok(())
    } else {
        Err(ParseError::UnsupportedFieldDelimiter {
            found: Some(value.trim().to_string()),
        })
    }
}

/// Split on tabs into exactly two parts.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split('\t');
    let key = parts.next()?;
    let value = parts.next()?;
    match parts.next() {
        Some(_) => None,
        None => Some((key, value)),
    }
}
