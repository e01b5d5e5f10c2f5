//! Settings file handling for Packline
//!
//! This module contains data structures for:
//! - `packline.yml` - Per-environment bundler settings
//! - Workspace root location (the directory holding `packline.yml`)

pub mod locate;
pub mod settings;

// Re-export commonly used types
pub use locate::SETTINGS_FILE;
pub use settings::{DevServerSettings, Mode, Settings, SettingsFile};
