use super::super::TelegramChannel;
use super::super::error::TelegramApiError;

impl TelegramChannel {
    pub(in crate::channels::telegram::channel) async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
    ) -> Result<(), TelegramApiError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });
        self.send_api_request("sendMessage", &body).await?;
        tracing::debug!(chat_id, "Telegram message sent");
        Ok(())
    }

    async fn send_api_request(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<(), TelegramApiError> {
        let response = self
            .client
            .post(self.api_url(method))
            .json(body)
            .send()
            .await
            .map_err(TelegramApiError::from_reqwest)?;
        Self::validate_telegram_response(response).await
    }
}
