//! Testing utilities
//!
//! Hand-typed ALE strings are easy to get subtly wrong (a space where a tab belongs is
//! invisible in most editors). Tests that need a realistic file should load one of the
//! checked-in samples under `ale-parser/tests/fixtures/` instead:
//!
//! ```rust,ignore
//! use ale_parser::ale::testing::{fixture, fixture_path};
//!
//! let doc = fixture("reel_a.ale").parse().unwrap();
//! let path = fixture_path("crlf.ale");
//! ```

use crate::ale::loader::DocumentLoader;
use std::path::PathBuf;

/// Absolute path of a sample file.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Loader for a sample file.
///
/// # Panics
///
/// Panics if the fixture does not exist; a missing fixture is a broken test tree.
pub fn fixture(name: &str) -> DocumentLoader {
    let path = fixture_path(name);
    DocumentLoader::from_path(&path)
        .unwrap_or_else(|err| panic!("fixture {} unreadable: {}", path.display(), err))
}

/// Source text of a sample file.
pub fn fixture_source(name: &str) -> String {
    fixture(name).into_source()
}
