//! Best-effort delivery of bot messages to the configured chat.

use std::sync::Arc;

use crate::channels::Channel;

/// Result of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Failed,
}

/// Sends messages to one fixed recipient and swallows delivery failures.
#[derive(Clone)]
pub struct Notifier {
    channel: Arc<dyn Channel>,
    recipient: String,
}

impl Notifier {
    pub fn new(channel: Arc<dyn Channel>, recipient: impl Into<String>) -> Self {
        Self {
            channel,
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Attempt delivery once. Failures are logged, never returned.
    pub async fn notify(&self, message: &str) -> Delivery {
        match self.channel.send(message, &self.recipient).await {
            Ok(()) => {
                tracing::debug!(
                    event = "homework_bot.notify.sent",
                    channel = self.channel.name(),
                    text = message,
                    "message sent"
                );
                Delivery::Delivered
            }
            Err(error) => {
                tracing::error!(
                    event = "homework_bot.notify.failed",
                    channel = self.channel.name(),
                    error = %error,
                    "failed to deliver message"
                );
                Delivery::Failed
            }
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("channel", &self.channel.name())
            .field("recipient", &self.recipient)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    use super::*;

    struct AcceptingChannel;

    #[async_trait]
    impl Channel for AcceptingChannel {
        fn name(&self) -> &str {
            "accepting"
        }

        async fn send(&self, _message: &str, _recipient: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct FieldNames(Arc<Mutex<Vec<Vec<&'static str>>>>);

    impl<S: tracing::Subscriber> Layer<S> for FieldNames {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let names = event.metadata().fields().iter().map(|field| field.name()).collect();
            self.0.lock().expect("field names lock").push(names);
        }
    }

    #[tokio::test]
    async fn sent_event_keeps_text_apart_from_log_message() {
        let recorded = FieldNames::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(recorded.clone()));
        let notifier = Notifier::new(Arc::new(AcceptingChannel), "1");

        assert_eq!(notifier.notify("hw1 approved").await, Delivery::Delivered);

        let events = recorded.0.lock().expect("field names lock");
        let sent = events
            .iter()
            .find(|names| names.contains(&"event"))
            .expect("sent event recorded");
        assert!(sent.contains(&"text"));
        assert_eq!(sent.iter().filter(|name| **name == "message").count(), 1);
    }
}
