//! Homework status bot: polls the review API and relays status changes to Telegram.
//!
//! - `config`: environment settings and the startup credential guard.
//! - `api` / `homework`: one request per cycle, shape checks, verdict formatting.
//! - `channels` / `notifier`: best-effort delivery to the configured chat.
//! - `poller`: the loop that owns the cursor and dedup state.

#![allow(missing_docs)]

mod api;
mod bot;
mod channels;
mod config;
mod error;
mod homework;
mod http;
mod notifier;
mod poller;

pub use api::{HomeworkApi, PracticumClient};
pub use bot::{LaunchOptions, launch, launch_default};
pub use channels::{Channel, TELEGRAM_MAX_MESSAGE_LENGTH, TelegramChannel};
pub use config::{
    BotConfig, BotSettings, DEFAULT_ENDPOINT, DEFAULT_RETRY_PERIOD_SECS,
    DEFAULT_TELEGRAM_API_BASE, ENDPOINT_ENV, PRACTICUM_TOKEN_ENV, RETRY_PERIOD_ENV,
    TELEGRAM_API_BASE_ENV, TELEGRAM_CHAT_ID_ENV, TELEGRAM_TOKEN_ENV, check_tokens, load_env_file,
};
pub use error::{
    ApiError, ConfigurationError, IterationError, ShapeError, StatusError, UnknownStatusError,
};
pub use homework::{HomeworkStatus, check_response, current_date, latest_homework, parse_status};
pub use notifier::{Delivery, Notifier};
pub use poller::{CycleOutcome, HomeworkPoller, PollState, PollSummary, PollerConfig};
