//! Projection
//!
//! Turns clips into output rows under a [`ColumnMapping`], and accumulates rows over a
//! batch of documents.
//!
//! For every clip and every `(source, target)` pair the row gets `target` set to the
//! clip's value for `source` when there is one, and to "no value" when the clip lacks
//! the column or holds an empty string. Targets are never omitted. When two pairs
//! share a target, the later pair wins.
//!
//! Any character a data line can hold passes through unchanged. Callers that need to
//! refuse some clips use [`project_with`] or [`Batch::add_document_with`]; a refused
//! clip is skipped on its own and the rest of its document, and the batch, carry on.

use crate::ale::document::{Clip, Document};
use crate::ale::error::{BatchError, ProjectionError};
use crate::ale::mapping::{ColumnMapping, MappingBuilder};
use crate::ale::parsing::parse_document;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One output row: target column → cell value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRow {
    cells: BTreeMap<String, Option<String>>,
}

impl OutputRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, target: impl Into<String>, value: Option<String>) {
        self.cells.insert(target.into(), value);
    }

    /// The cell for `target`. `None` both for "no value" and for a target this row
    /// never saw (a column first discovered in a later document).
    pub fn get(&self, target: &str) -> Option<&str> {
        self.cells.get(target).and_then(|value| value.as_deref())
    }

    pub fn has_target(&self, target: &str) -> bool {
        self.cells.contains_key(target)
    }

    /// Cells in the order of `columns`.
    pub fn cells<'a>(&'a self, columns: &'a [String]) -> impl Iterator<Item = Option<&'a str>> {
        columns.iter().map(move |column| self.get(column))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Rows plus the column order to write them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<OutputRow>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<OutputRow>) -> Self {
        Self { columns, rows }
    }

    /// Each row as cells in column order.
    pub fn records(&self) -> impl Iterator<Item = Vec<Option<&str>>> {
        self.rows
            .iter()
            .map(|row| row.cells(&self.columns).collect())
    }
}

pub type ClipOutcome = Result<OutputRow, ProjectionError>;

/// Project every clip of `document`, in clip order.
pub fn project(document: &Document, mapping: &ColumnMapping) -> Vec<OutputRow> {
    document
        .clips()
        .iter()
        .map(|clip| project_clip(clip, mapping))
        .collect()
}

/// Project every clip through `build`, in clip order.
///
/// `build` may turn a clip down with a reason; the outcome then carries the 1-based
/// clip number alongside it. Other clips are unaffected.
pub fn project_with<F>(
    document: &Document,
    mapping: &ColumnMapping,
    mut build: F,
) -> Vec<ClipOutcome>
where
    F: FnMut(&Clip, &ColumnMapping) -> Result<OutputRow, String>,
{
    document
        .clips()
        .iter()
        .enumerate()
        .map(|(index, clip)| {
            build(clip, mapping).map_err(|reason| ProjectionError::Rejected {
                clip: index + 1,
                reason,
            })
        })
        .collect()
}

/// The row for one clip.
pub fn project_clip(clip: &Clip, mapping: &ColumnMapping) -> OutputRow {
    let mut row = OutputRow::new();
    for pair in mapping.pairs() {
        let value = clip.value(&pair.source).into_option().map(str::to_string);
        row.set(pair.target.as_str(), value);
    }
    row
}

/// A clip left out of the output, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedClip {
    pub path: PathBuf,
    pub reason: ProjectionError,
}

/// Everything a batch produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionReport {
    pub table: Table,
    pub skipped: Vec<SkippedClip>,
}

/// Run driver for a batch of documents.
///
/// Owns the mapping and the row accumulator; both live exactly as long as the run.
/// Feed documents in ascending path order so that auto mapping discovers columns in
/// that order. Rows are emitted in ascending path order regardless.
#[derive(Debug)]
pub struct Batch {
    mapping: MappingBuilder,
    documents: Vec<(PathBuf, Vec<OutputRow>)>,
    skipped: Vec<SkippedClip>,
}

impl Batch {
    pub fn new(mapping: MappingBuilder) -> Self {
        Self {
            mapping,
            documents: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Parse `text` and add its clips. A parse failure is fatal for the run.
    pub fn add_source(&mut self, path: impl AsRef<Path>, text: &str) -> Result<usize, BatchError> {
        let path = path.as_ref();
        let document = parse_document(text).map_err(|err| BatchError::new(path, err))?;
        Ok(self.add_document(path, &document))
    }

    /// Extend the mapping with `document` and project its clips. Returns the number of
    /// rows added.
    pub fn add_document(&mut self, path: impl AsRef<Path>, document: &Document) -> usize {
        self.add_document_with(path, document, |clip, mapping| {
            Ok(project_clip(clip, mapping))
        })
    }

    /// Like [`add_document`](Self::add_document), with a custom row builder. Clips the
    /// builder rejects are recorded as skipped.
    pub fn add_document_with<F>(
        &mut self,
        path: impl AsRef<Path>,
        document: &Document,
        build: F,
    ) -> usize
    where
        F: FnMut(&Clip, &ColumnMapping) -> Result<OutputRow, String>,
    {
        let path = path.as_ref();
        self.mapping.observe(document);

        let mut rows = Vec::with_capacity(document.clips().len());
        for outcome in project_with(document, self.mapping.mapping(), build) {
            match outcome {
                Ok(row) => rows.push(row),
                Err(reason) => {
                    debug!(path = %path.display(), %reason, "Skipping clip");
                    self.skipped.push(SkippedClip {
                        path: path.to_path_buf(),
                        reason,
                    });
                }
            }
        }

        let added = rows.len();
        debug!(path = %path.display(), rows = added, "Projected document");
        self.documents.push((path.to_path_buf(), rows));
        added
    }

    pub fn mapping(&self) -> &ColumnMapping {
        self.mapping.mapping()
    }

    pub fn finish(mut self) -> ProjectionReport {
        self.documents.sort_by(|(a, _), (b, _)| a.cmp(b));
        let columns = self.mapping.mapping().target_columns();
        let rows = self
            .documents
            .into_iter()
            .flat_map(|(_, rows)| rows)
            .collect();

        ProjectionReport {
            table: Table::new(columns, rows),
            skipped: self.skipped,
        }
    }
}

/// Parse and project in-memory sources in one go, in ascending path order.
pub fn run_batch<I, P>(sources: I, mapping: MappingBuilder) -> Result<ProjectionReport, BatchError>
where
    I: IntoIterator<Item = (P, String)>,
    P: Into<PathBuf>,
{
    let mut sources: Vec<(PathBuf, String)> = sources
        .into_iter()
        .map(|(path, text)| (path.into(), text))
        .collect();
    sources.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut batch = Batch::new(mapping);
    for (path, text) in &sources {
        batch.add_source(path, text)?;
    }
    Ok(batch.finish())
}
