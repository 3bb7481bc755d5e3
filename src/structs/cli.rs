use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "telcoview")]
#[clap(about = "Telecom customer portal in your terminal", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
