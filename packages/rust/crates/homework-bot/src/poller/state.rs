/// Cursor and dedup memory owned by the poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (epoch seconds) for the next API query.
    pub cursor: i64,
    pub last_status_message: Option<String>,
    pub last_error_message: Option<String>,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_status_message: None,
            last_error_message: None,
        }
    }

    /// Start from the current wall-clock time.
    pub fn starting_now() -> Self {
        Self::new(chrono::Utc::now().timestamp())
    }

    pub(super) fn is_new_status(&self, message: &str) -> bool {
        self.last_status_message.as_deref() != Some(message)
    }

    pub(super) fn is_new_error(&self, message: &str) -> bool {
        self.last_error_message.as_deref() != Some(message)
    }

    /// Move the cursor to the server-reported date; `None` keeps it.
    pub(super) fn advance(&mut self, current_date: Option<i64>) {
        if let Some(current_date) = current_date {
            self.cursor = current_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_keeps_cursor_without_date() {
        let mut state = PollState::new(10);
        state.advance(None);
        assert_eq!(state.cursor, 10);
        state.advance(Some(20));
        assert_eq!(state.cursor, 20);
    }

    #[test]
    fn fresh_state_treats_everything_as_new() {
        let state = PollState::new(0);
        assert!(state.is_new_status("a"));
        assert!(state.is_new_error("a"));
    }
}
