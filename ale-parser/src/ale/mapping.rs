//! Column mapping
//!
//! A [`ColumnMapping`] decides which clip columns end up in the output and under
//! which names. It comes from one of two places:
//!
//!     - explicit: `SOURCE:TARGET` tokens given by the user, fixed for the whole run
//!     - auto: identity pairs discovered from the documents as they are processed
//!
//! Auto mode has two policies, see [`MappingPolicy`]. Either way a source column is
//! added at most once, in the order it was first seen.

use crate::ale::document::Document;
use crate::ale::error::MappingError;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnPair {
    pub source: String,
    pub target: String,
}

impl ColumnPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn identity(column: impl Into<String>) -> Self {
        let column = column.into();
        Self::new(column.clone(), column)
    }
}

/// Ordered source → target pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    pairs: Vec<ColumnPair>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `SOURCE:TARGET` tokens.
    ///
    /// Each token must hold exactly one colon with text on both sides. Errors name the
    /// offending token by its 1-based position.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pairs = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| parse_token(index + 1, token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { pairs })
    }

    pub fn push(&mut self, pair: ColumnPair) {
        self.pairs.push(pair);
    }

    pub fn pairs(&self) -> &[ColumnPair] {
        &self.pairs
    }

    pub fn contains_source(&self, source: &str) -> bool {
        self.pairs.iter().any(|pair| pair.source == source)
    }

    /// Target names in mapping order, duplicates collapsed to their first position.
    pub fn target_columns(&self) -> Vec<String> {
        let mut targets: Vec<String> = Vec::with_capacity(self.pairs.len());
        for pair in &self.pairs {
            if !targets.contains(&pair.target) {
                targets.push(pair.target.clone());
            }
        }
        targets
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn parse_token(index: usize, token: &str) -> Result<ColumnPair, MappingError> {
    let malformed = || MappingError::MalformedMappingToken {
        index,
        token: token.to_string(),
    };

    let mut parts = token.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(source), Some(target), None) if !source.is_empty() && !target.is_empty() => {
            Ok(ColumnPair::new(source, target))
        }
        _ => Err(malformed()),
    }
}

/// How auto mode grows the mapping across documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MappingPolicy {
    /// Every column of every document, in first-seen order.
    #[default]
    #[serde(rename = "union")]
    UnionAcrossDocuments,
    /// The columns of the first document only.
    #[serde(rename = "first-document")]
    FirstDocumentOnly,
}

impl std::str::FromStr for MappingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(MappingPolicy::UnionAcrossDocuments),
            "first-document" => Ok(MappingPolicy::FirstDocumentOnly),
            other => Err(format!(
                "unknown mapping policy '{}', expected 'union' or 'first-document'",
                other
            )),
        }
    }
}

/// Resolves the mapping for one run.
#[derive(Debug, Clone)]
pub enum MappingBuilder {
    Explicit(ColumnMapping),
    Auto {
        policy: MappingPolicy,
        mapping: ColumnMapping,
        documents_seen: usize,
    },
}

impl MappingBuilder {
    /// A fixed mapping read from user tokens.
    pub fn explicit<I, S>(tokens: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mapping = ColumnMapping::from_tokens(tokens)?;
        debug!(pairs = mapping.len(), "Using explicit column mapping");
        Ok(MappingBuilder::Explicit(mapping))
    }

    /// An empty mapping that grows with each observed document.
    pub fn auto(policy: MappingPolicy) -> Self {
        MappingBuilder::Auto {
            policy,
            mapping: ColumnMapping::new(),
            documents_seen: 0,
        }
    }

    /// Explicit when `tokens` holds anything, auto with `policy` otherwise.
    pub fn from_tokens_or_auto<S: AsRef<str>>(
        tokens: &[S],
        policy: MappingPolicy,
    ) -> Result<Self, MappingError> {
        if tokens.is_empty() {
            Ok(Self::auto(policy))
        } else {
            Self::explicit(tokens)
        }
    }

    /// Extend the mapping with the columns of `document`, if the mode allows it.
    pub fn observe(&mut self, document: &Document) {
        let MappingBuilder::Auto {
            policy,
            mapping,
            documents_seen,
        } = self
        else {
            return;
        };

        let adopt = match policy {
            MappingPolicy::UnionAcrossDocuments => true,
            MappingPolicy::FirstDocumentOnly => *documents_seen == 0,
        };
        *documents_seen += 1;
        if !adopt {
            return;
        }

        for column in document.columns() {
            if !mapping.contains_source(column) {
                debug!(column = %column, "Adding column to auto mapping");
                mapping.push(ColumnPair::identity(column.as_str()));
            }
        }
    }

    pub fn mapping(&self) -> &ColumnMapping {
        match self {
            MappingBuilder::Explicit(mapping) => mapping,
            MappingBuilder::Auto { mapping, .. } => mapping,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, MappingBuilder::Explicit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ale::parsing::parse_document;

    fn document(columns: &str) -> Document {
        let text = format!(
            "Heading\nFIELD_DELIM\tTABS\nVIDEO_FORMAT\tCUSTOM\nAUDIO_FORMAT\t48khz\nFPS\t24\n\nColumn\n{}\n\nData\n",
            columns
        );
        parse_document(&text).unwrap()
    }

    #[test]
    fn test_tokens_split_on_colon() {
        let mapping = ColumnMapping::from_tokens(["Name:name_csv", "Start:Start TC"]).unwrap();

        assert_eq!(
            mapping.pairs(),
            [
                ColumnPair::new("Name", "name_csv"),
                ColumnPair::new("Start", "Start TC")
            ]
        );
    }

    #[test]
    fn test_token_errors_name_position() {
        let err = ColumnMapping::from_tokens(["Name:name", "OnlyOneWord"]).unwrap_err();
        assert_eq!(
            err,
            MappingError::MalformedMappingToken {
                index: 2,
                token: "OnlyOneWord".to_string()
            }
        );
    }

    #[test]
    fn test_token_with_two_colons_rejected() {
        assert!(ColumnMapping::from_tokens(["Start:01:00"]).is_err());
    }

    #[test]
    fn test_token_with_empty_side_rejected() {
        assert!(ColumnMapping::from_tokens(["Name:"]).is_err());
        assert!(ColumnMapping::from_tokens([":name"]).is_err());
    }

    #[test]
    fn test_target_columns_collapse_duplicates() {
        let mapping = ColumnMapping::from_tokens(["Name:clip", "Start:tc", "Tape:clip"]).unwrap();
        assert_eq!(mapping.target_columns(), vec!["clip", "tc"]);
    }

    #[test]
    fn test_auto_union_accumulates_first_seen_order() {
        let mut builder = MappingBuilder::auto(MappingPolicy::UnionAcrossDocuments);
        builder.observe(&document("Name\tStart"));
        builder.observe(&document("Start\tTape\tName\tScene"));

        assert_eq!(
            builder.mapping().target_columns(),
            vec!["Name", "Start", "Tape", "Scene"]
        );
    }

    #[test]
    fn test_auto_first_document_only() {
        let mut builder = MappingBuilder::auto(MappingPolicy::FirstDocumentOnly);
        builder.observe(&document("Name\tStart"));
        builder.observe(&document("Tape"));

        assert_eq!(builder.mapping().target_columns(), vec!["Name", "Start"]);
    }

    #[test]
    fn test_explicit_mapping_never_grows() {
        let mut builder = MappingBuilder::explicit(["Name:clip"]).unwrap();
        builder.observe(&document("Name\tStart\tTape"));

        assert!(builder.is_explicit());
        assert_eq!(builder.mapping().len(), 1);
    }

    #[test]
    fn test_duplicate_document_columns_added_once() {
        let mut builder = MappingBuilder::auto(MappingPolicy::default());
        builder.observe(&document("Name\tName\tStart"));

        assert_eq!(builder.mapping().len(), 2);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "union".parse::<MappingPolicy>(),
            Ok(MappingPolicy::UnionAcrossDocuments)
        );
        assert_eq!(
            "first-document".parse::<MappingPolicy>(),
            Ok(MappingPolicy::FirstDocumentOnly)
        );
        assert!("all".parse::<MappingPolicy>().is_err());
    }
}
