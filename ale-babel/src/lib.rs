//! Tabular output for projected ALE rows
//!
//!     The parser crate stops at a [`Table`](ale_parser::Table): an ordered column list and
//!     rows keyed by column name. This crate turns a table into text. It is a pure lib,
//!     shell agnostic: no printing, no env vars, no files.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all output formats
//!     - FormatRegistry: discovery and selection of formats by name
//!     - Format implementations: `csv` and `json`
//!
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── csv.rs
//!     │   ├── json.rs
//!     │   └── mod.rs
//!     └── lib.rs
//!
//!     Cells with no value (the clip lacked the column, or held an empty string) are
//!     written as empty fields in CSV and as `null` in JSON.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
