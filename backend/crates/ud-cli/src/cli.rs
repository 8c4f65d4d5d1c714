use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ud")]
#[command(about = "Browse, search and extend the user directory")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory base URL (overrides remote.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
