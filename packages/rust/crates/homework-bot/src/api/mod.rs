//! Homework review API: the trait the poller depends on and its HTTP client.

mod client;

use async_trait::async_trait;

use crate::error::ApiError;

pub use client::PracticumClient;

/// Source of homework status feeds.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch the statuses changed since `from_date` (epoch seconds).
    ///
    /// One request, one outcome; implementations must not retry.
    async fn fetch_homework_statuses(&self, from_date: i64) -> Result<serde_json::Value, ApiError>;
}
