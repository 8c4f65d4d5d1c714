//! ud - user directory CLI
//!
//! Lists remote users merged with locally added ones, adds users to the
//! local store and shows single records. Results are JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # List everyone whose name or email contains "lean"
//! ud list --search lean --pretty
//!
//! # Add a user
//! ud add --name "Ada Lovelace" --email ada@example.com --phone 555-0100 --company Analytical
//!
//! # Show a user
//! ud show 1
//! ```

use ud_cli::{app, cli::Cli};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match app::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
