//! Error types and handling for Packline
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Settings file errors
//! - [`workspace`]: Workspace location errors
//! - [`pipeline`]: Loader rule errors
//! - [`digest`]: Build freshness errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

// Declare submodules
pub mod config;
pub mod digest;
pub mod fs;
pub mod pipeline;
pub mod workspace;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use config::{
    env_missing, invalid as config_invalid, not_found as config_not_found,
    parse_failed as config_parse_failed, read_failed as config_read_failed,
};
#[allow(unused_imports)]
pub use digest::{missing as digest_missing, stale as build_stale};
#[allow(unused_imports)]
pub use fs::{
    io_error, not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
#[allow(unused_imports)]
pub use pipeline::pattern_invalid;
#[allow(unused_imports)]
pub use workspace::not_found as workspace_not_found;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Packline operations
#[derive(Error, Diagnostic, Debug)]
pub enum PacklineError {
    // Configuration errors
    #[error("Settings file not found: {path}")]
    #[diagnostic(
        code(packline::config::not_found),
        help("Create a packline.yml at the workspace root")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read settings file: {path}")]
    #[diagnostic(code(packline::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse settings file: {path}")]
    #[diagnostic(code(packline::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid settings: {message}")]
    #[diagnostic(code(packline::config::invalid))]
    ConfigInvalid { message: String },

    #[error("No settings section for environment '{name}'")]
    #[diagnostic(
        code(packline::config::env_missing),
        help("Add a '{name}:' section to packline.yml (environments usually inherit via '<<: *default')")
    )]
    EnvironmentMissing { name: String },

    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(packline::workspace::not_found),
        help("Run from a directory containing packline.yml, or pass --workspace")
    )]
    WorkspaceNotFound { path: String },

    // Pipeline errors
    #[error("Invalid match pattern '{pattern}'")]
    #[diagnostic(code(packline::pipeline::pattern_invalid))]
    PatternInvalid { pattern: String, reason: String },

    // Digest errors
    #[error("No recorded build digest")]
    #[diagnostic(
        code(packline::digest::missing),
        help("Run 'packline check --record' after a compile to record a baseline")
    )]
    DigestMissing,

    #[error("Watched sources changed since the last recorded build")]
    #[diagnostic(
        code(packline::digest::stale),
        help("Re-run your bundler, then 'packline check --record' to refresh the digest")
    )]
    BuildStale,

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(packline::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(packline::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(packline::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(packline::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PacklineError {
    fn from(err: std::io::Error) -> Self {
        PacklineError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PacklineError {
    fn from(err: serde_yaml::Error) -> Self {
        PacklineError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PacklineError {
    fn from(err: serde_json::Error) -> Self {
        PacklineError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PacklineError>;
