//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - emit: Emit command arguments
//! - show: Show command arguments
//! - check: Check command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod emit;
pub mod show;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use emit::EmitArgs;
pub use show::ShowArgs;

/// Packline - loader-pipeline configurator
///
/// Assemble a front-end asset bundler's loader pipeline from per-environment settings.
#[derive(Parser, Debug)]
#[command(
    name = "packline",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Loader-pipeline configurator for front-end asset bundlers",
    long_about = "Packline assembles a front-end asset bundler's loader pipeline from \
                  per-environment settings: it seeds the base rules, registers the \
                  script-transform and markup loaders, and emits the resulting config \
                  for the bundler's compile stage.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  packline emit                          \x1b[90m# Print the bundler config\x1b[0m\n   \
                  packline emit -o config/bundler.json   \x1b[90m# Write it to a file\x1b[0m\n   \
                  packline show                          \x1b[90m# Inspect the loader pipeline\x1b[0m\n   \
                  packline check --record                \x1b[90m# Record the build digest\x1b[0m\n   \
                  packline check --frozen                \x1b[90m# Fail when sources changed (CI)\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "PACKLINE_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Environment to configure (development, test, production)
    #[arg(long, short = 'e', global = true, env = "PACKLINE_ENV")]
    pub env: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the bundler config and print or write it
    Emit(EmitArgs),

    /// Display the configured loader pipeline
    Show(ShowArgs),

    /// Validate settings and report watched-source freshness
    Check(CheckArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
