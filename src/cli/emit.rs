use clap::Parser;
use std::path::PathBuf;

/// Arguments for the emit command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the production config:\n    packline emit\n\n\
                  Print the development config:\n    packline emit -e development\n\n\
                  Write the config for the compile stage:\n    packline emit -o config/bundler.json\n\n\
                  Single-line output for piping:\n    packline emit --compact | jq .mode")]
pub struct EmitArgs {
    /// Write the config to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}
