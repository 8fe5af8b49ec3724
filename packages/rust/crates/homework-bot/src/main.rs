//! homework-bot CLI: poll the homework API and notify a Telegram chat.
//!
//! Secrets come from `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID`,
//! optionally seeded from `.env` (or `--env-file <path>`).
//!
//! Logging: set `RUST_LOG=homework_bot=debug` (or `info`, `warn`) to control logs on stderr.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use homework_bot::{BotSettings, LaunchOptions, launch_default, load_env_file};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_file = load_env_file(cli.env_file.as_deref())?;

    // Initialize tracing: RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "homework_bot=debug"
        } else {
            "homework_bot=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match &env_file {
        Some(path) => tracing::debug!(path = %path.display(), "loaded env file"),
        None => tracing::debug!("no .env file found; using process environment"),
    }

    let settings = BotSettings::from_env();
    let options = LaunchOptions {
        max_cycles: cli.max_cycles,
        from_date: cli.from_date,
    };
    let summary = launch_default(&settings, options).await?;
    tracing::info!(?summary, "homework bot stopped");
    Ok(())
}
