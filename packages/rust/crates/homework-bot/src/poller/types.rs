use std::time::Duration;

use crate::config::{BotConfig, DEFAULT_RETRY_PERIOD_SECS};
use crate::notifier::Delivery;

/// Loop timing for [`HomeworkPoller`](super::HomeworkPoller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    /// Sleep after every cycle, successful or not.
    pub retry_period: Duration,
    /// Stop after this many cycles; `None` polls forever.
    pub max_cycles: Option<u64>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            retry_period: Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
            max_cycles: None,
        }
    }
}

impl PollerConfig {
    pub fn from_config(config: &BotConfig) -> Self {
        Self {
            retry_period: config.retry_period(),
            ..Self::default()
        }
    }
}

/// What happened in one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The feed had no homework to report.
    Idle,
    /// A new status message was attempted.
    StatusSent { message: String, delivery: Delivery },
    /// The status message matched the last one sent.
    StatusUnchanged,
    /// The cycle failed and a new error message was attempted.
    ErrorReported { message: String, delivery: Delivery },
    /// The cycle failed with the same message as the last reported error.
    ErrorSuppressed,
}

impl CycleOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ErrorReported { .. } | Self::ErrorSuppressed)
    }

    pub fn delivery(&self) -> Option<Delivery> {
        match self {
            Self::StatusSent { delivery, .. } | Self::ErrorReported { delivery, .. } => {
                Some(*delivery)
            }
            Self::Idle | Self::StatusUnchanged | Self::ErrorSuppressed => None,
        }
    }
}

/// Counters for a bounded run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub cycles: u64,
    pub failed_cycles: u64,
    pub status_notifications: u64,
    pub error_notifications: u64,
    pub failed_deliveries: u64,
}
