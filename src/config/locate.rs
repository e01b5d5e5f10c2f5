//! Workspace root location
//!
//! This module provides functions for finding the workspace root, which is
//! the nearest ancestor directory containing a packline.yml settings file.

use std::path::{Path, PathBuf};

use normpath::PathExt;

/// Settings file name that marks a workspace root
pub const SETTINGS_FILE: &str = "packline.yml";

/// Check whether a settings file exists at the given directory
pub fn exists(dir: &Path) -> bool {
    dir.join(SETTINGS_FILE).is_file()
}

/// Find the workspace root at or above `start`
///
/// Walks up the directory tree until a directory containing packline.yml is
/// found. Returns `None` when the filesystem root is reached first.
pub fn find_from(start: &Path) -> Option<PathBuf> {
    let start = normalize(start);
    let mut current = start.as_path();
    loop {
        if exists(current) {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.normalize()
        .map(|p| p.into_path_buf())
        .unwrap_or_else(|_| path.to_path_buf())
}
