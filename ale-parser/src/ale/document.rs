//! Document model
//!
//! A [`Document`] is the result of a successful parse. It is immutable: the parser
//! builds it in one go and hands it out, nothing edits it afterwards.
//!
//! Presence policy
//!
//!     A clip only carries the columns its data line supplied values for. Looking a
//!     column up therefore has three outcomes, see [`FieldValue`]: the line was too
//!     short (`Absent`), the value was blank (`Empty`), or there is text (`Present`).
//!     Output writers collapse `Absent` and `Empty` into an empty cell; nothing inside
//!     this crate does.

use serde::Serialize;
use std::collections::BTreeMap;

/// Heading key/value pairs in declaration order.
///
/// Re-declaring a key replaces its value but keeps the position of the first declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: Vec<(String, String)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(field) => field.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Result of looking a column up in a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// The data line ended before this column.
    Absent,
    /// The data line had an empty value for this column.
    Empty,
    Present(&'a str),
}

impl<'a> FieldValue<'a> {
    /// Collapse to what an output cell holds: `None` for absent and empty alike.
    pub fn into_option(self) -> Option<&'a str> {
        match self {
            FieldValue::Present(value) => Some(value),
            FieldValue::Absent | FieldValue::Empty => None,
        }
    }
}

/// One data line, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Clip {
    fields: BTreeMap<String, String>,
}

impl Clip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clip by pairing columns with values positionally.
    ///
    /// Pairs stop at the shorter of the two sequences. A repeated column name keeps
    /// the value of its last occurrence.
    pub fn from_values<'a>(columns: &[String], values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut clip = Self::new();
        for (column, value) in columns.iter().zip(values) {
            clip.insert(column.clone(), value);
        }
        clip
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// The raw value for `column`, empty strings included.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn value(&self, column: &str) -> FieldValue<'_> {
        match self.get(column) {
            None => FieldValue::Absent,
            Some("") => FieldValue::Empty,
            Some(value) => FieldValue::Present(value),
        }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Number of columns this clip carries a value for.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A parsed ALE file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    #[serde(skip)]
    pub(crate) raw_text: String,
    pub(crate) metadata: Metadata,
    pub(crate) fps: i64,
    pub(crate) columns: Vec<String>,
    pub(crate) clips: Vec<Clip>,
}

impl Document {
    /// The text this document was parsed from, verbatim.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn fps(&self) -> i64 {
        self.fps
    }

    pub fn video_format(&self) -> &str {
        self.required(super::VIDEO_FORMAT)
    }

    pub fn audio_format(&self) -> &str {
        self.required(super::AUDIO_FORMAT)
    }

    pub fn film_format(&self) -> Option<&str> {
        self.metadata.get(super::FILM_FORMAT)
    }

    pub fn tape(&self) -> Option<&str> {
        self.metadata.get(super::TAPE)
    }

    /// Column names in declaration order, duplicates included.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    // The parser refuses documents without the required keys.
    fn required(&self, key: &str) -> &str {
        self.metadata.get(key).unwrap_or_default()
    }
}
