//! Emit command implementation

use std::path::PathBuf;

use crate::cli::EmitArgs;
use crate::commands::helpers;
use crate::error::{self, Result};

/// Assemble the bundler config and print or write it
pub fn run(workspace: Option<PathBuf>, env: Option<String>, args: EmitArgs) -> Result<()> {
    let context = helpers::resolve_context(workspace, env)?;
    let environment = helpers::configured_environment(&context)?;
    let config = environment.to_bundler_config()?;

    let rendered = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        error::fs::write_failed(parent.display().to_string(), e.to_string())
                    })?;
                }
            }
            std::fs::write(&path, format!("{}\n", rendered))
                .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
            println!("Wrote {} bundler config to {}", context.mode, path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
