use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Polls the homework review API and relays status changes to Telegram.")]
pub(crate) struct Cli {
    /// Load environment variables from this file instead of `./.env`.
    #[arg(long)]
    pub(crate) env_file: Option<PathBuf>,

    /// Stop after this many poll cycles (default: run forever).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) max_cycles: Option<u64>,

    /// Initial `from_date` cursor in epoch seconds (default: now).
    #[arg(long)]
    pub(crate) from_date: Option<i64>,

    /// Enable debug logs for the bot.
    #[arg(long, short)]
    pub(crate) verbose: bool,
}
