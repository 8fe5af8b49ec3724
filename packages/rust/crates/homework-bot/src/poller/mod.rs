//! Poll loop: fetch, validate, interpret, notify, sleep, repeat.

mod runner;
mod state;
mod types;

pub use runner::HomeworkPoller;
pub use state::PollState;
pub use types::{CycleOutcome, PollSummary, PollerConfig};
