//! Output formats by name
//!
//! The CLI resolves `--to` and the configured `convert.format` here, so an unknown
//! name fails before any input file is read.

use crate::error::FormatError;
use crate::format::Format;
use ale_parser::Table;
use std::collections::HashMap;

/// Output formats keyed by [`Format::name`].
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let text = registry.serialize(&table, "csv")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// No formats at all. Mostly for tests; see [`with_defaults`](Self::with_defaults).
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// `csv` and `json`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::CsvFormat);
        registry.register(crate::formats::JsonFormat);
        registry
    }

    /// Add `format` under its own name, replacing any format already there.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        let name = format.name().to_string();
        self.formats.insert(name, Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        match self.formats.get(name) {
            Some(format) => Ok(format.as_ref()),
            None => Err(FormatError::FormatNotFound(name.to_string())),
        }
    }

    /// Registered names, alphabetical, for `--list-formats`.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<String> = self.formats.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Render `table` with the format called `name`.
    pub fn serialize(&self, table: &Table, name: &str) -> Result<String, FormatError> {
        self.get(name)?.serialize(table)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
