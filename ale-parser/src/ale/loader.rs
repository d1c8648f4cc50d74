//! Document loading utilities
//!
//! `DocumentLoader` reads source text from a file or takes it from a string, and
//! parses it on demand. Used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust
//! use ale_parser::ale::loader::DocumentLoader;
//!
//! // From file
//! let doc = DocumentLoader::from_path("A001.ale")?.parse()?;
//!
//! // From string
//! let loader = DocumentLoader::from_string("Heading\nFIELD_DELIM\tTABS\n...");
//! let doc = loader.parse()?;
//! ```

use crate::ale::document::Document;
use crate::ale::error::LoaderError;
use crate::ale::parsing::parse_document;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    ///
    /// The file is opened, read to the end and closed before this returns, whether
    /// reading succeeded or not.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let mut source = String::new();
        {
            let mut file = File::open(path)?;
            file.read_to_string(&mut source)?;
        }
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Parse the source into a Document
    pub fn parse(&self) -> Result<Document, LoaderError> {
        Ok(parse_document(&self.source)?)
    }

    /// Get a reference to the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }
}
