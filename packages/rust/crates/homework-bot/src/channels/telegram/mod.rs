//! Telegram channel integration.

mod channel;

pub use channel::{TELEGRAM_MAX_MESSAGE_LENGTH, TelegramChannel};
