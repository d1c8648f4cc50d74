//! CSV output
//!
//! Comma delimited, header row of target column names, standard quoting. Cells with no
//! value are empty fields. Lines end with `\n` on every platform.

use crate::error::FormatError;
use crate::format::Format;
use ale_parser::Table;
use csv::{Terminator, WriterBuilder};

pub struct CsvFormat;

impl Format for CsvFormat {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "Comma separated values with a header row"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn serialize(&self, table: &Table) -> Result<String, FormatError> {
        if table.columns.is_empty() {
            return Ok(String::new());
        }

        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(&table.columns)?;
        for record in table.records() {
            writer.write_record(record.iter().map(|cell| cell.unwrap_or("")))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| FormatError::SerializationError(err.to_string()))?;
        String::from_utf8(bytes).map_err(|err| FormatError::SerializationError(err.to_string()))
    }
}
