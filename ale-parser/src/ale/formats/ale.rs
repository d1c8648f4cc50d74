//! ALE serialization
//!
//! Writes a [`Document`] back out as ALE text:
//!
//! ```text
//! Heading
//! FIELD_DELIM	TABS
//! VIDEO_FORMAT	CUSTOM
//! ...
//!
//! Column
//! Name	Start
//!
//! Data
//! A001	01:00:00:00
//! ```
//!
//! Values are written in column order; a column the clip has no value for becomes an
//! empty field. When a column name is declared twice, both positions get the clip's
//! (single) value for it.

use crate::ale::document::Document;
use crate::ale::{COLUMN, DATA, FIELD_DELIM, HEADING, TABS};

pub fn serialize_ale(document: &Document) -> String {
    let mut output = String::new();

    output.push_str(HEADING);
    output.push('\n');
    push_line(&mut output, [FIELD_DELIM, TABS]);
    for (key, value) in document.metadata().iter() {
        push_line(&mut output, [key, value]);
    }
    output.push('\n');

    output.push_str(COLUMN);
    output.push('\n');
    push_line(&mut output, document.columns().iter().map(String::as_str));
    output.push('\n');

    output.push_str(DATA);
    output.push('\n');
    for clip in document.clips() {
        push_line(
            &mut output,
            document
                .columns()
                .iter()
                .map(|column| clip.get(column).unwrap_or_default()),
        );
    }

    output
}

fn push_line<'a>(output: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            output.push('\t');
        }
        output.push_str(field);
    }
    output.push('\n');
}
