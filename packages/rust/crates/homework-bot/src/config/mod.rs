//! Bot configuration: raw settings from the environment and the startup guard.

mod env_file;
mod guard;
mod settings;

pub use env_file::load_env_file;
pub use guard::{BotConfig, check_tokens};
pub use settings::{
    BotSettings, DEFAULT_ENDPOINT, DEFAULT_RETRY_PERIOD_SECS, DEFAULT_TELEGRAM_API_BASE,
    ENDPOINT_ENV, PRACTICUM_TOKEN_ENV, RETRY_PERIOD_ENV, TELEGRAM_API_BASE_ENV,
    TELEGRAM_CHAT_ID_ENV, TELEGRAM_TOKEN_ENV,
};
