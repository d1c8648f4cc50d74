//! Error types for parsing, mapping and projection
//!
//! Everything except [`ProjectionError`] is fatal for a conversion run. A
//! projection error only costs the clip it was raised for.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One of the three sections of an ALE file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Heading,
    Column,
    Data,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Heading => super::HEADING,
            Section::Column => super::COLUMN,
            Section::Data => super::DATA,
        }
    }

    pub(crate) fn from_label(label: &str) -> Option<Section> {
        match label {
            super::HEADING => Some(Section::Heading),
            super::COLUMN => Some(Section::Column),
            super::DATA => Some(Section::Data),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised while turning ALE text into a [`Document`](super::document::Document).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing or misordered '{0}' section")]
    MissingOrMisorderedSection(Section),

    #[error("unexpected '{0}' section after the Data section")]
    UnexpectedSection(Section),

    #[error("{}", unsupported_delimiter_message(.found))]
    UnsupportedFieldDelimiter { found: Option<String> },

    #[error("Heading section, line {line}: expected KEY<TAB>VALUE")]
    MalformedHeadingLine { line: usize },

    #[error("Heading section: missing required key '{0}'")]
    MissingRequiredMetadata(String),

    #[error("Heading section: FPS value '{0}' is not an integer frame rate")]
    InvalidFrameRate(String),

    #[error("Column section: no column names declared")]
    EmptyColumnList,
}

fn unsupported_delimiter_message(found: &Option<String>) -> String {
    match found {
        Some(value) => format!(
            "Heading section: unsupported FIELD_DELIM '{}', only TABS is recognised",
            value
        ),
        None => "Heading section: no FIELD_DELIM declaration, only TABS is recognised".to_string(),
    }
}

/// Errors raised while reading `SOURCE:TARGET` mapping tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("map item #{index}: '{token}' must use the syntax ALEColumnName:CSVColumnName")]
    MalformedMappingToken { index: usize, token: String },
}

/// Per-clip failures. The clip is dropped and the batch carries on.
///
/// The built-in row builder never fails; this is raised when a custom builder passed
/// to [`project_with`](super::projection::project_with) turns a clip down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("clip #{clip}: {reason}")]
    Rejected { clip: usize, reason: String },
}

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A fatal error tied to the input that caused it.
#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct BatchError {
    pub path: PathBuf,
    #[source]
    pub source: LoaderError,
}

impl BatchError {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<LoaderError>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    /// The parse error behind this failure, if it was not an I/O problem.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match &self.source {
            LoaderError::Parse(err) => Some(err),
            LoaderError::Io(_) => None,
        }
    }
}
