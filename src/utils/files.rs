//! Source tree enumeration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Collects the basenames of all regular files under `root`.
///
/// Hidden directories and files (leading `.` in the name) are skipped
/// entirely, which keeps `.git`, `.venv` and similar dependency-management
/// trees out of the keyword vocabulary. Read-only, no side effects.
pub fn list_file_names<P: AsRef<Path>>(root: P) -> Result<Vec<String>> {
    let root = root.as_ref();
    let mut names = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if entry.file_type().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    debug!(count = names.len(), root = %root.display(), "collected file names");
    Ok(names)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
