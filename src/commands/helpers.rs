//! Shared helpers for command implementations

use std::path::PathBuf;

use crate::config::{Mode, Settings, locate};
use crate::environment::{Environment, build_environment};
use crate::error::{self, Result};
use crate::pipeline::script;
use crate::ui;

/// Resolved command context
pub struct Context {
    /// Workspace root (the directory holding packline.yml)
    pub root: PathBuf,

    /// Active build mode
    pub mode: Mode,

    /// Settings section for the active mode
    pub settings: Settings,
}

/// Resolve the workspace root, mode, and settings for a command
pub fn resolve_context(workspace: Option<PathBuf>, env: Option<String>) -> Result<Context> {
    let root = resolve_root(workspace)?;
    let mode = resolve_mode(env.as_deref());
    let settings = Settings::for_mode(&root, mode)?;
    Ok(Context {
        root,
        mode,
        settings,
    })
}

/// Resolve the workspace root from the `--workspace` option or the current
/// directory, walking up to the nearest packline.yml
pub fn resolve_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let start = match workspace {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    locate::find_from(&start)
        .ok_or_else(|| error::workspace::not_found(start.display().to_string()))
}

/// Resolve the active mode, warning when an unknown label falls back
pub fn resolve_mode(flag: Option<&str>) -> Mode {
    let (mode, rejected) = Mode::resolve(flag);
    if let Some(label) = rejected {
        ui::warn(&format!(
            "\"{}\" is not a recognized environment, falling back to \"production\"",
            label
        ));
    }
    mode
}

/// Build the fully configured environment for a command context
pub fn configured_environment(context: &Context) -> Result<Environment> {
    let environment = Environment::from_settings(&context.root, context.mode, &context.settings)?;
    build_environment(environment, script::transform()?)
}
