use std::sync::Arc;

use crate::api::HomeworkApi;
use crate::error::IterationError;
use crate::homework::{check_response, current_date, latest_homework, parse_status};
use crate::notifier::{Delivery, Notifier};

use super::state::PollState;
use super::types::{CycleOutcome, PollSummary, PollerConfig};

const ERROR_MESSAGE_PREFIX: &str = "Сбой в работе программы";

/// Polls the homework API and relays status changes.
pub struct HomeworkPoller {
    api: Arc<dyn HomeworkApi>,
    notifier: Notifier,
    config: PollerConfig,
    state: PollState,
}

impl HomeworkPoller {
    pub fn new(
        api: Arc<dyn HomeworkApi>,
        notifier: Notifier,
        config: PollerConfig,
        state: PollState,
    ) -> Self {
        Self {
            api,
            notifier,
            config,
            state,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Run cycles until `max_cycles` is reached; with no limit this never returns.
    ///
    /// Sleeps `retry_period` between cycles, never after the last one of a bounded run.
    /// A limit of zero runs no cycle at all.
    pub async fn run(mut self) -> PollSummary {
        let mut summary = PollSummary::default();
        while !self.limit_reached(&summary) {
            if summary.cycles > 0 {
                tracing::debug!(
                    event = "homework_bot.poll.sleep",
                    retry_period_secs = self.config.retry_period.as_secs(),
                    "waiting for next cycle"
                );
                tokio::time::sleep(self.config.retry_period).await;
            }
            tracing::debug!(
                event = "homework_bot.poll.cycle_started",
                cycle = summary.cycles + 1,
                cursor = self.state.cursor,
                "poll cycle started"
            );
            let outcome = self.run_cycle().await;
            record(&mut summary, &outcome);
        }
        tracing::info!(
            event = "homework_bot.poll.finished",
            cycles = summary.cycles,
            failed_cycles = summary.failed_cycles,
            "poll loop reached its cycle limit"
        );
        summary
    }

    fn limit_reached(&self, summary: &PollSummary) -> bool {
        self.config
            .max_cycles
            .is_some_and(|max_cycles| summary.cycles >= max_cycles)
    }

    /// One poll cycle. Iteration failures are reported, never returned.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.check_homework().await {
            Ok(outcome) => outcome,
            Err(error) => self.report_failure(&error).await,
        }
    }

    async fn check_homework(&mut self) -> Result<CycleOutcome, IterationError> {
        let response = self.api.fetch_homework_statuses(self.state.cursor).await?;
        check_response(&response)?;

        let outcome = match latest_homework(&response) {
            Some(homework) => {
                let message = parse_status(homework)?;
                self.notify_status(message).await
            }
            None => CycleOutcome::Idle,
        };

        self.state.advance(current_date(&response));
        Ok(outcome)
    }

    async fn notify_status(&mut self, message: String) -> CycleOutcome {
        if !self.state.is_new_status(&message) {
            tracing::debug!(
                event = "homework_bot.poll.status_unchanged",
                "status message already sent"
            );
            return CycleOutcome::StatusUnchanged;
        }
        let delivery = self.notifier.notify(&message).await;
        self.state.last_status_message = Some(message.clone());
        CycleOutcome::StatusSent { message, delivery }
    }

    async fn report_failure(&mut self, error: &IterationError) -> CycleOutcome {
        let message = format!("{ERROR_MESSAGE_PREFIX}: {error}");
        tracing::error!(
            event = "homework_bot.poll.cycle_failed",
            kind = error.kind(),
            error = %error,
            "poll cycle failed"
        );
        if !self.state.is_new_error(&message) {
            tracing::debug!(
                event = "homework_bot.poll.error_suppressed",
                "same error already reported"
            );
            return CycleOutcome::ErrorSuppressed;
        }
        let delivery = self.notifier.notify(&message).await;
        self.state.last_error_message = Some(message.clone());
        CycleOutcome::ErrorReported { message, delivery }
    }
}

fn record(summary: &mut PollSummary, outcome: &CycleOutcome) {
    summary.cycles += 1;
    if outcome.is_failure() {
        summary.failed_cycles += 1;
    }
    match outcome {
        CycleOutcome::StatusSent { .. } => summary.status_notifications += 1,
        CycleOutcome::ErrorReported { .. } => summary.error_notifications += 1,
        CycleOutcome::Idle | CycleOutcome::StatusUnchanged | CycleOutcome::ErrorSuppressed => {}
    }
    if outcome.delivery() == Some(Delivery::Failed) {
        summary.failed_deliveries += 1;
    }
}
