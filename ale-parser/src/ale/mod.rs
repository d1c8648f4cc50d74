//! Main module for ALE library functionality

pub mod document;
pub mod error;
pub mod formats;
pub mod loader;
pub mod mapping;
pub mod parsing;
pub mod projection;
pub mod testing;

/// Section labels, in the order they must appear.
pub const HEADING: &str = "Heading";
pub const COLUMN: &str = "Column";
pub const DATA: &str = "Data";

/// Heading keys with a defined meaning.
pub const FIELD_DELIM: &str = "FIELD_DELIM";
pub const VIDEO_FORMAT: &str = "VIDEO_FORMAT";
pub const AUDIO_FORMAT: &str = "AUDIO_FORMAT";
pub const FPS: &str = "FPS";
pub const FILM_FORMAT: &str = "FILM_FORMAT";
pub const TAPE: &str = "TAPE";

/// The only supported `FIELD_DELIM` value.
pub const TABS: &str = "TABS";

/// Keys every document must declare in its heading.
pub const REQUIRED_METADATA: [&str; 3] = [VIDEO_FORMAT, AUDIO_FORMAT, FPS];
