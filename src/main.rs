//! Packline - loader-pipeline configurator
//!
//! A command line tool that assembles bundler loader pipelines and entry maps
//! from a single `packline.yml`, keeping the generated config reproducible
//! across development, test, and production environments.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod digest;
mod environment;
mod error;
mod pipeline;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::run(cli.workspace, cli.env, args),
        Commands::Show(args) => commands::show::run(cli.workspace, cli.env, args),
        Commands::Check(args) => commands::check::run(cli.workspace, cli.env, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
