use std::time::Duration;

use crate::error::ConfigurationError;

use super::settings::{
    BotSettings, PRACTICUM_TOKEN_ENV, TELEGRAM_CHAT_ID_ENV, TELEGRAM_TOKEN_ENV,
};

/// Validated configuration. Only [`check_tokens`] can produce one.
#[derive(Clone)]
pub struct BotConfig {
    practicum_token: String,
    telegram_token: String,
    telegram_chat_id: String,
    endpoint: String,
    telegram_api_base_url: String,
    retry_period: Duration,
}

impl BotConfig {
    pub fn practicum_token(&self) -> &str {
        &self.practicum_token
    }

    pub fn telegram_token(&self) -> &str {
        &self.telegram_token
    }

    pub fn telegram_chat_id(&self) -> &str {
        &self.telegram_chat_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn telegram_api_base_url(&self) -> &str {
        &self.telegram_api_base_url
    }

    pub fn retry_period(&self) -> Duration {
        self.retry_period
    }
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_base_url", &self.telegram_api_base_url)
            .field("retry_period", &self.retry_period)
            .finish_non_exhaustive()
    }
}

/// Check that every required secret is present.
///
/// Reports all missing names at once, in declaration order. Runs once at
/// startup; the caller is expected to exit on failure.
pub fn check_tokens(settings: &BotSettings) -> Result<BotConfig, ConfigurationError> {
    let mut missing: Vec<&'static str> = Vec::new();
    let mut require = |name: &'static str, value: Option<&String>| {
        match value.filter(|value| !value.trim().is_empty()) {
            Some(value) => value.clone(),
            None => {
                missing.push(name);
                String::new()
            }
        }
    };
    let practicum_token = require(PRACTICUM_TOKEN_ENV, settings.practicum_token.as_ref());
    let telegram_token = require(TELEGRAM_TOKEN_ENV, settings.telegram_token.as_ref());
    let telegram_chat_id = require(TELEGRAM_CHAT_ID_ENV, settings.telegram_chat_id.as_ref());

    if !missing.is_empty() {
        let error = ConfigurationError::MissingCredentials(missing);
        tracing::error!(
            event = "homework_bot.config.missing_credentials",
            severity = "critical",
            missing = ?error.missing(),
            "{error}"
        );
        return Err(error);
    }

    tracing::info!(
        event = "homework_bot.config.ready",
        endpoint = %settings.endpoint,
        retry_period_secs = settings.retry_period.as_secs(),
        "all required credentials are present"
    );
    Ok(BotConfig {
        practicum_token,
        telegram_token,
        telegram_chat_id,
        endpoint: settings.endpoint.clone(),
        telegram_api_base_url: settings.telegram_api_base_url.clone(),
        retry_period: settings.retry_period,
    })
}
