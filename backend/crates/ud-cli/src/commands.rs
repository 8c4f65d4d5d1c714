use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List users, locally added ones first
    List {
        /// Only users whose name or email contains this (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one user's details
    Show {
        /// User ID (numeric IDs are matched as numbers)
        id: String,
    },

    /// Add a user to the local store
    Add {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        company: String,
    },
}
