use std::time::Duration;

use crate::config::{BotConfig, DEFAULT_TELEGRAM_API_BASE};
use crate::http::build_http_client;

use super::TelegramChannel;
use super::constants::{TELEGRAM_HTTP_CONNECT_TIMEOUT_SECS, TELEGRAM_HTTP_REQUEST_TIMEOUT_SECS};

impl TelegramChannel {
    /// Create a channel against the public Bot API.
    pub fn new(bot_token: String) -> Self {
        Self::new_with_base_url(bot_token, DEFAULT_TELEGRAM_API_BASE.to_string())
    }

    /// Create a channel with a custom API base URL (useful for tests/proxies).
    pub fn new_with_base_url(bot_token: String, api_base_url: String) -> Self {
        let client = build_http_client(
            "telegram",
            Duration::from_secs(TELEGRAM_HTTP_CONNECT_TIMEOUT_SECS),
            Duration::from_secs(TELEGRAM_HTTP_REQUEST_TIMEOUT_SECS),
        );
        Self::new_with_base_url_and_client(bot_token, api_base_url, client)
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new_with_base_url(
            config.telegram_token().to_string(),
            config.telegram_api_base_url().to_string(),
        )
    }

    #[doc(hidden)]
    pub fn new_with_base_url_and_client(
        bot_token: String,
        api_base_url: String,
        client: reqwest::Client,
    ) -> Self {
        Self {
            bot_token,
            api_base_url,
            client,
        }
    }
}
