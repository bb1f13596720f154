use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedloader")]
#[command(about = "Load a remote JSON image feed and print its items")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the feed once and print its items
    Load {
        /// Feed URL (falls back to FEEDLOADER_URL)
        url: Option<String>,

        /// Print items as a JSON array
        #[arg(long)]
        json: bool,

        /// Seconds to wait for the feed (overrides FEEDLOADER_TIMEOUT_SECS)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },
}
