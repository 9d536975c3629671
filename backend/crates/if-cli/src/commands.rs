use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and persist the session
    Login {
        /// Account email (case-insensitive)
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long, env = "IF_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and clear the persisted session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Check one permission for the signed-in user
    Can {
        /// create, read, update, delete, approve, convert, comment, vote
        permission: String,
    },

    /// Show role checks for the signed-in user
    Role,

    /// List directory accounts (without credentials)
    Users,
}
