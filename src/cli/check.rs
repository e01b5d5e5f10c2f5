use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the configuration:\n    packline check\n\n\
                  Record the digest after a compile:\n    packline check --record\n\n\
                  Fail in CI when a rebuild is due:\n    packline check --frozen")]
pub struct CheckArgs {
    /// Record the current watched-source digest as the build baseline
    #[arg(long)]
    pub record: bool,

    /// Fail when no digest is recorded or watched sources changed
    #[arg(long, conflicts_with = "record")]
    pub frozen: bool,
}
