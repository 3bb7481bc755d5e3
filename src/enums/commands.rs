use clap::Subcommand;
use crate::enums::dataset_kind::DatasetKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and seed the local store with default data
    Init,
    /// Sign up for a new account
    Signup {
        #[clap(short, long)]
        name: String,
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        password: String,
    },
    /// Log in with email and password
    Login {
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        password: String,
    },
    /// Log in with a Google account
    Google,
    /// End the current session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Render the account dashboard
    Dashboard,
    /// Import an analytics CSV file into the dashboard datasets
    Import {
        file: String,
    },
    /// Export a dashboard dataset as CSV
    Export {
        #[clap(value_enum)]
        kind: DatasetKind,
        #[clap(short, long)]
        output: Option<String>,
    },
    /// Write a sample CSV showing the expected format
    Sample {
        #[clap(value_enum)]
        kind: DatasetKind,
        #[clap(short, long)]
        output: Option<String>,
    },
    /// Restore the default dashboard datasets
    Reset,
    /// List bills
    Bills {
        /// Include already-paid bills
        #[clap(short, long)]
        all: bool,
    },
    /// Pay a pending bill
    Pay {
        bill: String,
        #[clap(short, long)]
        method: Option<String>,
    },
    /// List payment methods
    Methods,
    /// Show the rewards catalog and point balance
    Rewards,
    /// Redeem a reward by id
    Redeem {
        reward: String,
    },
    /// Update profile fields
    Profile {
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        email: Option<String>,
    },
    /// Toggle notification preferences
    Prefs {
        #[clap(long)]
        alerts: Option<bool>,
        #[clap(long)]
        auto_pay: Option<bool>,
        #[clap(long)]
        data_alerts: Option<bool>,
    },
}
