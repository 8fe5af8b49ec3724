//! Telegram Bot API transport for outgoing text messages.

mod constants;
mod constructor;
mod error;
mod send_api;
mod send_text;
mod state;
mod trait_impl;

pub use constants::TELEGRAM_MAX_MESSAGE_LENGTH;
pub use state::TelegramChannel;
