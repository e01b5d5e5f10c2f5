//! Per-environment settings (packline.yml) data structures

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::locate::SETTINGS_FILE;
use crate::error::{self, Result};

/// Build environment selector
///
/// The label doubles as the section key in packline.yml.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Test,
    Production,
}

impl Mode {
    /// Label used for section lookup and display
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Test => "test",
            Mode::Production => "production",
        }
    }

    /// The `mode` value written into the emitted bundler config
    ///
    /// Test builds compile unoptimized, so test emits "development".
    pub fn bundler_mode(&self) -> &'static str {
        match self {
            Mode::Development | Mode::Test => "development",
            Mode::Production => "production",
        }
    }

    /// Parse a mode label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "development" => Some(Mode::Development),
            "test" => Some(Mode::Test),
            "production" => Some(Mode::Production),
            _ => None,
        }
    }

    /// Resolve the active mode from the `--env` flag and process environment
    ///
    /// Precedence: the explicit flag, then `PACKLINE_ENV`, then `NODE_ENV`.
    /// An unset or empty label defaults to production. An unrecognized label
    /// also resolves to production; it is returned alongside the mode so the
    /// caller can print a warning.
    pub fn resolve(flag: Option<&str>) -> (Self, Option<String>) {
        let label = flag
            .map(str::to_string)
            .filter(|value| !value.is_empty())
            .or_else(|| env_label("PACKLINE_ENV"))
            .or_else(|| env_label("NODE_ENV"));

        match label {
            Some(label) => match Self::from_label(&label) {
                Some(mode) => (mode, None),
                None => (Mode::Production, Some(label)),
            },
            None => (Mode::Production, None),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn env_label(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Dev server section of a settings environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerSettings {
    /// Host the dev server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the dev server listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for DevServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// One environment's settings section from packline.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding front-end sources, relative to the workspace root
    #[serde(default = "default_source_path")]
    pub source_path: String,

    /// Entry-point directory inside the source directory
    #[serde(default = "default_source_entry_path")]
    pub source_entry_path: String,

    /// Public web root, relative to the workspace root
    #[serde(default = "default_public_root_path")]
    pub public_root_path: String,

    /// Compiled output directory inside the public root
    #[serde(default = "default_public_output_path")]
    pub public_output_path: String,

    /// Cache directory, relative to the workspace root
    #[serde(default = "default_cache_path")]
    pub cache_path: String,

    /// Entry-point extensions, in resolution order
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Globs for the paths whose contents gate compilation freshness
    #[serde(default = "default_watched_paths")]
    pub watched_paths: Vec<String>,

    /// Dev server settings, attached to the emitted config when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerSettings>,

    /// Free-form fragment deep-merged over the emitted bundler config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<serde_yaml::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            source_entry_path: default_source_entry_path(),
            public_root_path: default_public_root_path(),
            public_output_path: default_public_output_path(),
            cache_path: default_cache_path(),
            extensions: default_extensions(),
            watched_paths: default_watched_paths(),
            dev_server: None,
            overrides: None,
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3035
}

fn default_source_path() -> String {
    "app/frontend".to_string()
}

fn default_source_entry_path() -> String {
    "entrypoints".to_string()
}

fn default_public_root_path() -> String {
    "public".to_string()
}

fn default_public_output_path() -> String {
    "bundles".to_string()
}

fn default_cache_path() -> String {
    "tmp/cache/packline".to_string()
}

fn default_extensions() -> Vec<String> {
    [".ts", ".tsx", ".js", ".jsx", ".mjs"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_watched_paths() -> Vec<String> {
    [
        "app/frontend/**/*",
        "package.json",
        "yarn.lock",
        "packline.yml",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

impl Settings {
    /// Load the settings section for `mode` from the workspace's packline.yml
    pub fn for_mode(root: &Path, mode: Mode) -> Result<Self> {
        let file = SettingsFile::load(&root.join(SETTINGS_FILE))?;
        file.select(mode)
    }

    /// Absolute source directory
    pub fn source_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.source_path)
    }

    /// Absolute entry-point directory
    pub fn entry_dir(&self, root: &Path) -> PathBuf {
        self.source_dir(root).join(&self.source_entry_path)
    }

    /// Absolute compiled output directory
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.public_root_path)
            .join(&self.public_output_path)
    }

    /// Absolute cache directory
    pub fn cache_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.cache_path)
    }

    /// Public URL prefix for compiled assets, with leading and trailing slash
    pub fn public_path(&self) -> String {
        format!("/{}/", self.public_output_path.trim_matches('/'))
    }

    /// Validate the settings section
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(error::config::invalid("extensions must not be empty"));
        }
        for ext in &self.extensions {
            if !ext.starts_with('.') {
                return Err(error::config::invalid(format!(
                    "extension '{}' must start with a dot",
                    ext
                )));
            }
        }
        Ok(())
    }
}

/// The whole packline.yml document, sections keyed by environment label
///
/// YAML merge keys are resolved at load time, so the conventional layout
/// with a `default: &default` anchor and `<<: *default` per environment
/// deserializes into complete sections.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    origin: String,
    document: serde_yaml::Value,
}

impl SettingsFile {
    /// Load and parse packline.yml from disk
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        if !path.exists() {
            return Err(error::config::not_found(origin));
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(&origin, e.to_string()))?;
        Self::parse(&contents, &origin)
    }

    /// Parse a settings document from a YAML string
    pub fn parse(contents: &str, origin: &str) -> Result<Self> {
        let mut document: serde_yaml::Value = serde_yaml::from_str(contents)
            .map_err(|e| error::config::parse_failed(origin, e.to_string()))?;
        document
            .apply_merge()
            .map_err(|e| error::config::parse_failed(origin, e.to_string()))?;
        Ok(Self {
            origin: origin.to_string(),
            document,
        })
    }

    /// Extract and validate the settings section for one mode
    pub fn select(&self, mode: Mode) -> Result<Settings> {
        let section = self
            .document
            .get(mode.as_str())
            .ok_or_else(|| error::config::env_missing(mode.as_str()))?;
        let settings: Settings = serde_yaml::from_value(section.clone())
            .map_err(|e| error::config::parse_failed(&self.origin, e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Section labels present in the document, in file order
    pub fn sections(&self) -> Vec<String> {
        match &self.document {
            serde_yaml::Value::Mapping(map) => map
                .keys()
                .filter_map(|key| key.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}
