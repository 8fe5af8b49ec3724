use super::TelegramChannel;
use super::constants::TELEGRAM_MAX_MESSAGE_LENGTH;

impl TelegramChannel {
    pub(super) async fn send_text(&self, message: &str, chat_id: &str) -> anyhow::Result<()> {
        let text = truncate_for_telegram(message);
        if text.len() < message.len() {
            tracing::warn!(
                chars = message.chars().count(),
                limit = TELEGRAM_MAX_MESSAGE_LENGTH,
                "Telegram message exceeds limit; truncating"
            );
        }
        self.send_message(chat_id, text)
            .await
            .map_err(|error| anyhow::anyhow!("Telegram sendMessage failed: {error}"))
    }
}

fn truncate_for_telegram(message: &str) -> &str {
    match message.char_indices().nth(TELEGRAM_MAX_MESSAGE_LENGTH) {
        Some((cut, _)) => &message[..cut],
        None => message,
    }
}
