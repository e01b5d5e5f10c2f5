//! Show command implementation

use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::ui;

/// Display the configured loader pipeline
pub fn run(workspace: Option<PathBuf>, env: Option<String>, args: ShowArgs) -> Result<()> {
    let context = helpers::resolve_context(workspace, env)?;
    let environment = helpers::configured_environment(&context)?;

    ui::field("Environment:", context.mode.as_str());
    if context.mode.as_str() != context.mode.bundler_mode() {
        ui::field("Bundler mode:", context.mode.bundler_mode());
    }
    println!();

    let rule_count = environment.loaders.len();
    let rules_label = if rule_count == 1 { "rule" } else { "rules" };
    ui::heading(&format!("Pipeline ({} {}):", rule_count, rules_label));
    for (position, entry) in environment.loaders.iter().enumerate() {
        ui::print_rule(position + 1, entry);
    }

    if args.rules_only {
        return Ok(());
    }

    println!();
    let entry_count = environment.entries.len();
    let entries_label = if entry_count == 1 { "entry" } else { "entries" };
    ui::heading(&format!("Entries ({} {}):", entry_count, entries_label));
    for (name, path) in &environment.entries {
        ui::field(name, &path.display().to_string());
    }

    println!();
    ui::heading("Output:");
    ui::field("Path:", &environment.output.path.display().to_string());
    ui::field("Public path:", &environment.output.public_path);
    ui::field("Filename:", &environment.output.filename);

    if let Some(dev_server) = &environment.dev_server {
        println!();
        ui::heading("Dev server:");
        ui::field("Address:", &format!("{}:{}", dev_server.host, dev_server.port));
    }

    Ok(())
}
