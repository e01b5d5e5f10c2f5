//! Watched-source digests for compilation freshness
//!
//! The compile stage records a digest of every watched file after a
//! successful build; `check` compares the current digest against it to
//! decide whether a rebuild is due.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use blake3::Hasher;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::Settings;
use crate::error::{self, Result};

/// Hash prefix for BLAKE3 digests
pub const HASH_PREFIX: &str = "blake3:";

/// Digest file name inside the cache directory
pub const DIGEST_FILE: &str = "last-build-digest";

/// Digest the watched sources of a workspace
///
/// Workspace-relative paths are matched against the settings' watched-path
/// globs, sorted, and streamed into one hasher (relative path, NUL,
/// contents, NUL) for a deterministic result.
pub fn watched_digest(root: &Path, settings: &Settings) -> Result<String> {
    let globs = compile_globs(&settings.watched_paths)?;

    let mut files: Vec<(String, PathBuf)> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(root).ok()?;
            let normalized = relative.to_string_lossy().replace('\\', "/");
            let matched = {
                let candidate = CandidatePath::from(normalized.as_str());
                globs.iter().any(|glob| glob.matched(&candidate).is_some())
            };
            matched.then(|| (normalized, entry.path().to_path_buf()))
        })
        .collect();

    // Sort for deterministic hashing
    files.sort();

    let mut hasher = Hasher::new();
    for (relative, path) in files {
        hasher.update(relative.as_bytes());
        hasher.update(b"\0"); // null separator
        hash_file_contents(&mut hasher, &path)?;
        hasher.update(b"\0"); // null separator between files
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

fn compile_globs(patterns: &[String]) -> Result<Vec<Glob<'_>>> {
    patterns
        .iter()
        .map(|pattern| {
            Glob::new(pattern).map_err(|e| {
                error::config::invalid(format!("invalid watched path glob '{}': {}", pattern, e))
            })
        })
        .collect()
}

fn hash_file_contents(hasher: &mut Hasher, path: &Path) -> Result<()> {
    let file = File::open(path)
        .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;

    let mut reader = BufReader::new(file);
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(())
}

/// Where the recorded digest lives for these settings
pub fn digest_path(root: &Path, settings: &Settings) -> PathBuf {
    settings.cache_dir(root).join(DIGEST_FILE)
}

/// Read the recorded digest, if any
pub fn recorded_digest(root: &Path, settings: &Settings) -> Result<Option<String>> {
    let path = digest_path(root, settings);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;
    Ok(Some(contents.trim().to_string()))
}

/// Record a digest for later freshness checks
pub fn record(root: &Path, settings: &Settings, digest: &str) -> Result<()> {
    let path = digest_path(root, settings);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| error::fs::write_failed(parent.display().to_string(), e.to_string()))?;
    }
    std::fs::write(&path, format!("{}\n", digest))
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
}

/// Compare a recorded digest against the current one
///
/// Both sides are normalized to carry the hash prefix first.
pub fn is_fresh(recorded: &str, current: &str) -> bool {
    let normalize = |digest: &str| {
        if digest.starts_with(HASH_PREFIX) {
            digest.to_string()
        } else {
            format!("{}{}", HASH_PREFIX, digest)
        }
    };

    normalize(recorded) == normalize(current)
}
