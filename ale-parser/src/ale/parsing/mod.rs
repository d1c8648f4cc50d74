//! ALE text → [`Document`]
//!
//! The parser is strict and all-or-nothing: it either returns a complete document or
//! the first violation it met, in this order:
//!
//!     1. `Heading` label                      MissingOrMisorderedSection(Heading)
//!     2. heading body                         UnsupportedFieldDelimiter, MalformedHeadingLine
//!     3. `Column` label and body              MissingOrMisorderedSection(Column), EmptyColumnList
//!     4. `Data` label                         MissingOrMisorderedSection(Data)
//!     5. anything after the data              UnexpectedSection
//!     6. required metadata, frame rate        MissingRequiredMetadata, InvalidFrameRate
//!
//! Data lines never fail. Short lines leave trailing columns out of the clip, long
//! lines lose their surplus values.

mod heading;
pub(crate) mod sections;

use crate::ale::document::{Clip, Document, Metadata};
use crate::ale::error::{ParseError, Section};
use crate::ale::{FPS, REQUIRED_METADATA};
use sections::{normalize_line_endings, split_sections, Fragment};
use std::iter::Peekable;
use tracing::{debug, warn};

/// Parse the text of one ALE file.
pub fn parse_document(text: &str) -> Result<Document, ParseError> {
    let normalized = normalize_line_endings(text);
    let mut fragments = split_sections(&normalized).into_iter().peekable();

    expect_label(&mut fragments, Section::Heading)?;
    let metadata = heading::parse_heading(take_body(&mut fragments).unwrap_or_default())?;

    expect_label(&mut fragments, Section::Column)?;
    let columns = parse_columns(take_body(&mut fragments))?;

    expect_label(&mut fragments, Section::Data)?;
    let clips = parse_data(&columns, take_body(&mut fragments));

    if let Some(Fragment::Label(section)) = fragments.next() {
        return Err(ParseError::UnexpectedSection(section));
    }

    let fps = check_metadata(&metadata)?;

    Ok(Document {
        raw_text: text.to_string(),
        metadata,
        fps,
        columns,
        clips,
    })
}

fn expect_label<'a, I>(fragments: &mut Peekable<I>, expected: Section) -> Result<(), ParseError>
where
    I: Iterator<Item = Fragment<'a>>,
{
    match fragments.next() {
        Some(Fragment::Label(section)) if section == expected => Ok(()),
        _ => Err(ParseError::MissingOrMisorderedSection(expected)),
    }
}

fn take_body<'a, I>(fragments: &mut Peekable<I>) -> Option<&'a str>
where
    I: Iterator<Item = Fragment<'a>>,
{
    match fragments.peek() {
        Some(Fragment::Body(body)) => {
            let body = *body;
            fragments.next();
            Some(body)
        }
        _ => None,
    }
}

/// The first non-blank line of the column body, split on tabs.
fn parse_columns(body: Option<&str>) -> Result<Vec<String>, ParseError> {
    let mut lines = body
        .unwrap_or_default()
        .split('\n')
        .filter(|line| !line.trim().is_empty());

    let columns: Vec<String> = lines
        .next()
        .unwrap_or_default()
        .split('\t')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    let ignored = lines.count();
    if ignored > 0 {
        warn!(ignored, "Column section has more than one line, extra lines ignored");
    }

    if columns.is_empty() {
        return Err(ParseError::EmptyColumnList);
    }
    Ok(columns)
}

fn parse_data(columns: &[String], body: Option<&str>) -> Vec<Clip> {
    let Some(body) = body else {
        return Vec::new();
    };

    body.split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let values: Vec<&str> = line.split('\t').collect();
            if values.len() > columns.len() {
                debug!(
                    line = index + 1,
                    values = values.len(),
                    columns = columns.len(),
                    "Data line has more values than columns, extra values ignored"
                );
            }
            Clip::from_values(columns, values)
        })
        .collect()
}

fn check_metadata(metadata: &Metadata) -> Result<i64, ParseError> {
    if let Some(missing) = REQUIRED_METADATA
        .iter()
        .find(|key| !metadata.contains_key(key))
    {
        return Err(ParseError::MissingRequiredMetadata(missing.to_string()));
    }

    let fps = metadata.get(FPS).unwrap_or_default();
    fps.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidFrameRate(fps.to_string()))
}
