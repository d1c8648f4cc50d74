//! # ale-parser
//!
//! Parser and projection engine for Avid Log Exchange (ALE) files.
//!
//! File Layout
//!
//!     An ALE file has three sections, always in this order:
//!
//!         Heading     key/value pairs, one of which must be `FIELD_DELIM	TABS`
//!         Column      one line of tab separated column names
//!         Data        one line per clip, values aligned to the column list
//!
//!     The crate is split along the same path data takes through a conversion run:
//!
//!     src/ale
//!       ├── parsing       text → Document (strict, all-or-nothing)
//!       ├── document      the parsed model: metadata, columns, clips
//!       ├── mapping       source column → target column resolution
//!       ├── projection    Document × mapping → output rows, batch accumulation
//!       ├── formats       Document → ALE text
//!       ├── loader        file/string loading shortcuts
//!       └── testing       fixture access for tests
//!
//!     Writing the projected rows to CSV or JSON lives in `ale-babel`; walking
//!     directories and wiring a command line lives in `ale-cli`.

pub mod ale;

pub use ale::document::{Clip, Document, FieldValue, Metadata};
pub use ale::error::{BatchError, LoaderError, MappingError, ParseError, ProjectionError};
pub use ale::mapping::{ColumnMapping, ColumnPair, MappingBuilder, MappingPolicy};
pub use ale::parsing::parse_document;
pub use ale::projection::{
    project, project_clip, project_with, Batch, ClipOutcome, OutputRow, ProjectionReport,
    SkippedClip, Table,
};
