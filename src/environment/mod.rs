//! The bundler environment
//!
//! This module contains the environment object the configurator mutates and
//! the consumers it feeds:
//! - [`configure`]: Registers the transform and markup rules
//! - [`entries`]: Entry-point discovery
//! - [`merge`]: Deep merge for config overrides
//!
//! An environment is constructed once per process from the selected
//! settings section, mutated by the configurator, then consumed immutably.

pub mod configure;
pub mod entries;
pub mod merge;

// Re-export the configurator entry point
pub use configure::build_environment;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::config::{Mode, Settings};
use crate::error::{self, Result};
use crate::pipeline::{RuleList, base};

/// Compiled output location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Absolute directory compiled assets land in
    pub path: PathBuf,

    /// Public URL prefix for compiled assets
    pub public_path: String,

    /// Output file-name template
    pub filename: String,
}

/// Dev server address attached to development configs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevServer {
    pub host: String,
    pub port: u16,
}

/// The mutable bundler environment
#[derive(Debug, Clone)]
pub struct Environment {
    /// Active build mode
    pub mode: Mode,

    /// Ordered loader-rule registry
    pub loaders: RuleList,

    /// Entry points by name
    pub entries: BTreeMap<String, PathBuf>,

    /// Extensions the bundler resolves imports against, in order
    pub resolve_extensions: Vec<String>,

    /// Compiled output location
    pub output: Output,

    /// Dev server address, when the settings section defines one
    pub dev_server: Option<DevServer>,

    /// Free-form fragment merged over the emitted config
    pub overrides: serde_json::Value,

    /// Absolute source directory, emitted as the bundler's context
    pub source_dir: PathBuf,
}

impl Environment {
    /// Build the environment for one settings section
    ///
    /// Seeds the rule list with the base rules in registration order,
    /// discovers entry points, and resolves output locations.
    pub fn from_settings(root: &Path, mode: Mode, settings: &Settings) -> Result<Self> {
        let mut loaders = RuleList::new();
        for rule in base::all()? {
            loaders.append(rule);
        }

        let filename = match mode {
            Mode::Production => "js/[name]-[contenthash].js",
            Mode::Development | Mode::Test => "js/[name].js",
        };

        let overrides = match &settings.overrides {
            Some(value) => serde_json::to_value(value).map_err(|e| {
                error::config::invalid(format!("overrides are not JSON-compatible: {}", e))
            })?,
            None => serde_json::Value::Null,
        };

        Ok(Self {
            mode,
            loaders,
            entries: entries::discover(root, settings),
            resolve_extensions: settings.extensions.clone(),
            output: Output {
                path: settings.output_dir(root),
                public_path: settings.public_path(),
                filename: filename.to_string(),
            },
            dev_server: settings.dev_server.as_ref().map(|dev| DevServer {
                host: dev.host.clone(),
                port: dev.port,
            }),
            overrides,
            source_dir: settings.source_dir(root),
        })
    }

    /// Render the bundler config consumed by the compile stage
    ///
    /// The `overrides` fragment is deep-merged on top last, so a settings
    /// section can adjust anything the assembled config contains.
    pub fn to_bundler_config(&self) -> Result<serde_json::Value> {
        let entry: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|(name, path)| (name.clone(), json!(path.display().to_string())))
            .collect();

        let rules = self
            .loaders
            .rules()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut config = json!({
            "mode": self.mode.bundler_mode(),
            "context": self.source_dir.display().to_string(),
            "entry": entry,
            "module": { "rules": rules },
            "output": {
                "filename": self.output.filename,
                "path": self.output.path.display().to_string(),
                "publicPath": self.output.public_path,
            },
            "resolve": { "extensions": self.resolve_extensions },
        });

        if let Some(dev_server) = &self.dev_server {
            config["devServer"] = json!({
                "host": dev_server.host,
                "port": dev_server.port,
            });
        }

        if !self.overrides.is_null() {
            config = merge::deep_merge(config, self.overrides.clone());
        }

        Ok(config)
    }
}
