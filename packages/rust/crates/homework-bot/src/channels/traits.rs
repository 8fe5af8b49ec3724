//! Channel trait for chat platforms the bot can post to.

use async_trait::async_trait;

/// Outbound chat channel.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Send a plain-text message to `recipient`.
    async fn send(&self, message: &str, recipient: &str) -> anyhow::Result<()>;
}
