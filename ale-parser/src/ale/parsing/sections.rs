//! Section splitting
//!
//! Cuts normalized ALE text into a flat stream of labels and bodies. A label is a line
//! holding nothing but `Heading`, `Column` or `Data` (trailing spaces allowed). Bodies
//! are trimmed of surrounding blank lines only; tabs at the edges of the first and
//! last content line are kept, since they are field separators.

use crate::ale::error::Section;
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(Heading|Column|Data) *$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fragment<'a> {
    Label(Section),
    Body(&'a str),
}

/// Split `text` (line endings already normalized to `\n`) into fragments.
///
/// Blank bodies are dropped, so two labels can be adjacent in the output.
pub(crate) fn split_sections(text: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut cursor = 0;

    for captures in SECTION_LABEL.captures_iter(text) {
        let (Some(line), Some(label)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let Some(section) = Section::from_label(label.as_str()) else {
            continue;
        };
        push_body(&mut fragments, &text[cursor..line.start()]);
        fragments.push(Fragment::Label(section));
        cursor = line.end();
    }
    push_body(&mut fragments, &text[cursor..]);

    fragments
}

fn push_body<'a>(fragments: &mut Vec<Fragment<'a>>, body: &'a str) {
    if let Some(trimmed) = trim_blank_lines(body) {
        fragments.push(Fragment::Body(trimmed));
    }
}

/// Strip whitespace-only lines from both ends of `body`. `None` if nothing is left.
pub(crate) fn trim_blank_lines(body: &str) -> Option<&str> {
    let mut offset = 0;
    let mut start = None;
    let mut end = 0;

    for line in body.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        if !content.trim().is_empty() {
            start.get_or_insert(offset);
            end = offset + content.len();
        }
        offset += line.len();
    }

    start.map(|start| &body[start..end])
}

/// Replace `\r\n` and lone `\r` with `\n`.
pub(crate) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_three_sections() {
        let text = "Heading\nFIELD_DELIM\tTABS\n\nColumn\nName\tStart\n\nData\nA001\t01:00:00:00\n";
        let fragments = split_sections(text);

        assert_eq!(
            fragments,
            vec![
                Fragment::Label(Section::Heading),
                Fragment::Body("FIELD_DELIM\tTABS"),
                Fragment::Label(Section::Column),
                Fragment::Body("Name\tStart"),
                Fragment::Label(Section::Data),
                Fragment::Body("A001\t01:00:00:00"),
            ]
        );
    }

    #[test]
    fn test_label_with_trailing_blanks() {
        let fragments = split_sections("Heading  \nA\tB\n");
        assert_eq!(fragments[0], Fragment::Label(Section::Heading));
    }

    #[test]
    fn test_label_followed_by_tab_is_a_record() {
        let fragments = split_sections("Data\nA001\nData\t\nColumn\t\t\n");
        assert_eq!(
            fragments,
            vec![
                Fragment::Label(Section::Data),
                Fragment::Body("A001\nData\t\nColumn\t\t"),
            ]
        );
    }

    #[test]
    fn test_label_must_fill_the_line() {
        let fragments = split_sections("Heading notes\n");
        assert_eq!(fragments, vec![Fragment::Body("Heading notes")]);
    }

    #[test]
    fn test_empty_bodies_are_dropped() {
        let fragments = split_sections("Heading\n\n\nColumn\n");
        assert_eq!(
            fragments,
            vec![
                Fragment::Label(Section::Heading),
                Fragment::Label(Section::Column)
            ]
        );
    }

    #[test]
    fn test_trim_keeps_edge_tabs() {
        assert_eq!(trim_blank_lines("\n  \n\tB\tC\n\n"), Some("\tB\tC"));
        assert_eq!(trim_blank_lines("A\t\n"), Some("A\t"));
        assert_eq!(trim_blank_lines(" \n\t\n"), None);
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }
}
