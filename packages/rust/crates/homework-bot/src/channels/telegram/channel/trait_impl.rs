use async_trait::async_trait;

use crate::channels::traits::Channel;

use super::TelegramChannel;

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, message: &str, recipient: &str) -> anyhow::Result<()> {
        self.send_text(message, recipient).await
    }
}
