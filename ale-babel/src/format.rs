//! Format trait definition
//!
//! Every output format implements [`Format`]. The trait is object safe so formats can
//! be stored in, and picked from, a [`FormatRegistry`](crate::registry::FormatRegistry).
//!
//! # Examples
//!
//! ```ignore
//! struct MyFormat;
//!
//! impl Format for MyFormat {
//!     fn name(&self) -> &str {
//!         "my-format"
//!     }
//!
//!     fn file_extension(&self) -> &str {
//!         "txt"
//!     }
//!
//!     fn serialize(&self, table: &Table) -> Result<String, FormatError> {
//!         todo!()
//!     }
//! }
//! ```

use crate::error::FormatError;
use ale_parser::Table;

pub trait Format: Send + Sync {
    /// The name of this format (e.g., "csv", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Extension for files written in this format, without the dot
    fn file_extension(&self) -> &str;

    /// Serialize a table into text
    fn serialize(&self, table: &Table) -> Result<String, FormatError>;
}
