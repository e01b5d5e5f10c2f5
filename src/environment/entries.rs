//! Entry-point discovery

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Settings;

/// Discover entry points under the settings' entry directory
///
/// Every file whose extension appears in `settings.extensions` becomes an
/// entry. The entry name is the path relative to the entry directory with
/// the extension removed ("application", "admin/dashboard"). When two files
/// share a stem, the later one in sorted walk order wins. A missing entry
/// directory yields an empty map.
pub fn discover(root: &Path, settings: &Settings) -> BTreeMap<String, PathBuf> {
    let entry_dir = settings.entry_dir(root);
    let mut entries = BTreeMap::new();

    if !entry_dir.is_dir() {
        return entries;
    }

    let mut files: Vec<_> = WalkDir::new(&entry_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|path| has_known_extension(path, &settings.extensions))
        .collect();

    // Sort for deterministic collision handling
    files.sort();

    for path in files {
        if let Some(name) = entry_name(&entry_dir, &path) {
            entries.insert(name, path);
        }
    }

    entries
}

fn has_known_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let dotted = format!(".{}", ext);
    extensions.iter().any(|known| known == &dotted)
}

fn entry_name(entry_dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(entry_dir).ok()?;
    let stem = relative.with_extension("");
    let name = stem.to_string_lossy().replace('\\', "/");
    if name.is_empty() { None } else { Some(name) }
}
