use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;

use crate::config::BotConfig;
use crate::error::ApiError;
use crate::http::build_http_client;

use super::HomeworkApi;

const API_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const API_HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// `reqwest` client for the Practicum homework statuses endpoint.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        let client = build_http_client(
            "homework_api",
            Duration::from_secs(API_HTTP_CONNECT_TIMEOUT_SECS),
            Duration::from_secs(API_HTTP_REQUEST_TIMEOUT_SECS),
        );
        Self::new_with_client(endpoint, token, client)
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(config.endpoint(), config.practicum_token())
    }

    #[doc(hidden)]
    pub fn new_with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch_homework_statuses(&self, from_date: i64) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(
            event = "homework_bot.api.request",
            from_date,
            endpoint = %self.endpoint,
            "requesting homework statuses"
        );
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|error| {
                tracing::error!(
                    event = "homework_bot.api.transport_failed",
                    error = %error,
                    "homework endpoint is unreachable"
                );
                ApiError::Transport(error)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(
                event = "homework_bot.api.non_success_status",
                %status,
                "homework endpoint returned unexpected status"
            );
            return Err(ApiError::HttpStatus(status));
        }

        let body = response.bytes().await.map_err(|error| {
            tracing::error!(
                event = "homework_bot.api.body_read_failed",
                error = %error,
                "failed to read homework endpoint body"
            );
            ApiError::Transport(error)
        })?;
        let data: serde_json::Value = serde_json::from_slice(&body).map_err(|error| {
            tracing::error!(
                event = "homework_bot.api.decode_failed",
                error = %error,
                "homework endpoint returned malformed JSON"
            );
            ApiError::Decode(error)
        })?;
        tracing::debug!(event = "homework_bot.api.response", body = %data, "received API answer");
        Ok(data)
    }
}
