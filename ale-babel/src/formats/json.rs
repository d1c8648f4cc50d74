//! JSON output
//!
//! ```text
//! {
//!   "columns": ["Name", "Start"],
//!   "rows": [["A001", "01:00:00:00"]]
//! }
//! ```
//!
//! Cells with no value are `null`.

use crate::error::FormatError;
use crate::format::Format;
use ale_parser::Table;
use serde::Serialize;

pub struct JsonFormat;

#[derive(Serialize)]
struct JsonTable<'a> {
    columns: &'a [String],
    rows: Vec<Vec<Option<&'a str>>>,
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Column list plus an array of rows, null for missing cells"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn serialize(&self, table: &Table) -> Result<String, FormatError> {
        let json = JsonTable {
            columns: &table.columns,
            rows: table.records().collect(),
        };
        let mut output = serde_json::to_string_pretty(&json)?;
        output.push('\n');
        Ok(output)
    }
}
