//! Check command implementation

use std::path::PathBuf;

use crate::cli::CheckArgs;
use crate::commands::helpers;
use crate::digest;
use crate::error::{self, Result};
use crate::ui;

/// Validate settings and report watched-source freshness
pub fn run(workspace: Option<PathBuf>, env: Option<String>, args: CheckArgs) -> Result<()> {
    let context = helpers::resolve_context(workspace, env)?;

    // Assemble the whole config so settings problems surface here, not in
    // the compile stage.
    let environment = helpers::configured_environment(&context)?;
    environment.to_bundler_config()?;

    ui::field("Environment:", context.mode.as_str());
    ui::field("Rules:", &environment.loaders.len().to_string());
    ui::field("Entries:", &environment.entries.len().to_string());

    let current = digest::watched_digest(&context.root, &context.settings)?;

    if args.record {
        digest::record(&context.root, &context.settings, &current)?;
        let path = digest::digest_path(&context.root, &context.settings);
        println!("Recorded build digest at {}", path.display());
        return Ok(());
    }

    match digest::recorded_digest(&context.root, &context.settings)? {
        Some(recorded) if digest::is_fresh(&recorded, &current) => {
            println!("Watched sources unchanged since the last recorded build");
            Ok(())
        }
        Some(_) => {
            if args.frozen {
                return Err(error::digest::stale());
            }
            ui::warn("Watched sources changed since the last recorded build");
            Ok(())
        }
        None => {
            if args.frozen {
                return Err(error::digest::missing());
            }
            ui::warn("No recorded build digest (run 'packline check --record' after a compile)");
            Ok(())
        }
    }
}
