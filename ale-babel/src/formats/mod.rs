//! Format implementations

pub mod csv;
pub mod json;

pub use csv::CsvFormat;
pub use json::JsonFormat;
