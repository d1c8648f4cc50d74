//! Input discovery
//!
//! Turns the items given on the command line into the list of files to read. A file
//! item is taken when it carries the `.ale` extension (any case) or when every
//! extension is allowed. A directory item is walked, recursively unless told
//! otherwise. Hidden files and ignore files get no special treatment.
//!
//! The result is de-duplicated and sorted, so the batch sees inputs in a stable order
//! whatever order the shell expanded them in.

use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct DiscoveryOptions {
    pub recurse: bool,
    pub allow_all_extensions: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            recurse: true,
            allow_all_extensions: false,
        }
    }
}

pub fn discover<P: AsRef<Path>>(
    items: &[P],
    options: DiscoveryOptions,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut found = BTreeSet::new();

    for item in items {
        let item = item.as_ref();
        if item.is_file() {
            if accepts(item, options) {
                found.insert(item.to_path_buf());
            } else {
                debug!(path = %item.display(), "Skipping file without .ale extension");
            }
        } else if item.is_dir() {
            walk(item, options, &mut found)?;
        } else {
            return Err(DiscoveryError::NotFound(item.to_path_buf()));
        }
    }

    Ok(found.into_iter().collect())
}

fn walk(
    root: &Path,
    options: DiscoveryOptions,
    found: &mut BTreeSet<PathBuf>,
) -> Result<(), DiscoveryError> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    if !options.recurse {
        builder.max_depth(Some(1));
    }

    for entry in builder.build() {
        let entry = entry?;
        let is_file = entry.file_type().is_some_and(|kind| kind.is_file());
        if is_file && accepts(entry.path(), options) {
            found.insert(entry.into_path());
        }
    }
    Ok(())
}

fn accepts(path: &Path, options: DiscoveryOptions) -> bool {
    options.allow_all_extensions
        || path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ale"))
}
