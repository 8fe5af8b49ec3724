//! Shared `reqwest` client construction for outbound HTTP.

use std::time::Duration;

/// Build a client with connect and request timeouts.
///
/// Falls back to a default client when the builder fails; `label` names the
/// caller in the warning.
pub(crate) fn build_http_client(
    label: &str,
    connect_timeout: Duration,
    request_timeout: Duration,
) -> reqwest::Client {
    match reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
    {
        Ok(client) => client,
        Err(error) => {
            tracing::warn!(
                client = label,
                error = %error,
                "Failed to build HTTP client with timeouts; falling back to default client"
            );
            reqwest::Client::new()
        }
    }
}
