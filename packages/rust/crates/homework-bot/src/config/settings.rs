//! Raw bot settings as read from the environment.
//!
//! Nothing here is validated beyond numeric parsing; secrets stay optional
//! until [`check_tokens`](super::check_tokens) turns them into a `BotConfig`.

use std::time::Duration;

pub const PRACTICUM_TOKEN_ENV: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";
pub const ENDPOINT_ENV: &str = "HOMEWORK_BOT_ENDPOINT";
pub const RETRY_PERIOD_ENV: &str = "HOMEWORK_BOT_RETRY_PERIOD_SECS";
pub const TELEGRAM_API_BASE_ENV: &str = "HOMEWORK_BOT_TELEGRAM_API_BASE_URL";

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Settings gathered at startup, before the configuration guard runs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BotSettings {
    pub practicum_token: Option<String>,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub endpoint: String,
    pub telegram_api_base_url: String,
    pub retry_period: Duration,
}

impl BotSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            practicum_token: resolve_secret(&lookup, PRACTICUM_TOKEN_ENV),
            telegram_token: resolve_secret(&lookup, TELEGRAM_TOKEN_ENV),
            telegram_chat_id: resolve_secret(&lookup, TELEGRAM_CHAT_ID_ENV),
            endpoint: resolve_string(&lookup, ENDPOINT_ENV, DEFAULT_ENDPOINT),
            telegram_api_base_url: resolve_string(
                &lookup,
                TELEGRAM_API_BASE_ENV,
                DEFAULT_TELEGRAM_API_BASE,
            ),
            retry_period: Duration::from_secs(resolve_positive_u64(
                &lookup,
                RETRY_PERIOD_ENV,
                DEFAULT_RETRY_PERIOD_SECS,
            )),
        }
    }
}

// Secrets never reach the logs, even at debug level.
impl std::fmt::Debug for BotSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotSettings")
            .field("practicum_token", &self.practicum_token.as_ref().map(|_| "***"))
            .field("telegram_token", &self.telegram_token.as_ref().map(|_| "***"))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_base_url", &self.telegram_api_base_url)
            .field("retry_period", &self.retry_period)
            .finish()
    }
}

fn resolve_secret<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn resolve_string<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    resolve_secret(lookup, name).unwrap_or_else(|| default.to_string())
}

fn resolve_positive_u64<F>(lookup: &F, name: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => value,
        _ => {
            tracing::warn!(
                env_var = %name,
                value = %raw,
                default,
                "invalid bot config env value; using default"
            );
            default
        }
    }
}
