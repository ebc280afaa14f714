use clap::Parser;

/// CLI arguments parser using `clap`
///
/// Any value left out on the command line is collected interactively
/// before the setup sequence runs.
#[derive(Parser, Debug)]
#[command(about = "Sets Git identity, configures the origin remote, commits all changes and pushes them.")]
pub struct Cli {
    /// Git username to record on commits
    #[arg(long)]
    pub name: Option<String>,
    /// Git email address to record on commits
    #[arg(long)]
    pub email: Option<String>,
    /// Commit message for the pending changes
    #[arg(short, long)]
    pub message: Option<String>,
    /// Remote repository URL (SSH or HTTPS)
    #[arg(long)]
    pub url: Option<String>,
    /// Write the identity to this repository's config instead of the global one
    #[arg(long)]
    pub local: bool,
}
