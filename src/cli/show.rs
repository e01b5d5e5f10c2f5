use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the production pipeline:\n    packline show\n\n\
                  Show the development pipeline:\n    packline show -e development\n\n\
                  Show only the loader rules:\n    packline show --rules-only")]
pub struct ShowArgs {
    /// Show only the loader rules, without entries and output
    #[arg(long)]
    pub rules_only: bool,
}
