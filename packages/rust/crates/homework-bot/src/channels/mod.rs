//! Chat channels the bot delivers notifications through.

mod telegram;
mod traits;

pub use telegram::{TELEGRAM_MAX_MESSAGE_LENGTH, TelegramChannel};
pub use traits::Channel;
