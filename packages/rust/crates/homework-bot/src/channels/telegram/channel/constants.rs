/// Telegram's maximum message length for text messages.
pub const TELEGRAM_MAX_MESSAGE_LENGTH: usize = 4096;

pub(super) const TELEGRAM_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
pub(super) const TELEGRAM_HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;
