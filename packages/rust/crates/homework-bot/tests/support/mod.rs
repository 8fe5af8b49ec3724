//! Scripted collaborators shared by the poller and launch tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use homework_bot::{
    ApiError, Channel, HomeworkApi, HomeworkPoller, Notifier, PollState, PollerConfig,
};
use serde_json::Value;

pub const CHAT_ID: &str = "424242";

type ScriptedResponse = Box<dyn FnOnce() -> Result<Value, ApiError> + Send>;

/// API double that replays queued answers and records every `from_date`.
#[derive(Default)]
pub struct ScriptedApi {
    responses: Mutex<VecDeque<ScriptedResponse>>,
    calls: Mutex<Vec<i64>>,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ok(&self, body: Value) {
        self.push(move || Ok(body));
    }

    pub fn push_err<F>(&self, error: F)
    where
        F: FnOnce() -> ApiError + Send + 'static,
    {
        self.push(move || Err(error()));
    }

    fn push<F>(&self, response: F)
    where
        F: FnOnce() -> Result<Value, ApiError> + Send + 'static,
    {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Box::new(response));
    }

    pub fn calls(&self) -> Vec<i64> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl HomeworkApi for ScriptedApi {
    async fn fetch_homework_statuses(&self, from_date: i64) -> Result<Value, ApiError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(from_date);
        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        match next {
            Some(response) => response(),
            None => Ok(serde_json::json!({ "homeworks": [] })),
        }
    }
}

/// Channel double that records deliveries and can be told to fail.
#[derive(Default)]
pub struct RecordingChannel {
    sent: Mutex<Vec<(String, String)>>,
    fail: Mutex<bool>,
}

impl RecordingChannel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let channel = Self::default();
        *channel.fail.lock().unwrap_or_else(PoisonError::into_inner) = true;
        Arc::new(channel)
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap_or_else(PoisonError::into_inner) = fail;
    }

    /// Messages the channel was asked to send, including failed attempts.
    pub fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }

    pub fn recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, recipient)| recipient.clone())
            .collect()
    }
}

#[async_trait]
impl Channel for RecordingChannel {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, message: &str, recipient: &str) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((message.to_string(), recipient.to_string()));
        if *self.fail.lock().unwrap_or_else(PoisonError::into_inner) {
            anyhow::bail!("chat is unreachable");
        }
        Ok(())
    }
}

pub fn poller(api: &Arc<ScriptedApi>, channel: &Arc<RecordingChannel>, cursor: i64) -> HomeworkPoller {
    HomeworkPoller::new(
        api.clone(),
        Notifier::new(channel.clone(), CHAT_ID),
        PollerConfig {
            retry_period: Duration::from_millis(1),
            max_cycles: None,
        },
        PollState::new(cursor),
    )
}

pub fn feed(name: &str, status: &str, current_date: i64) -> Value {
    serde_json::json!({
        "homeworks": [{ "homework_name": name, "status": status }],
        "current_date": current_date,
    })
}

pub async fn wait_for_listener(addr: std::net::SocketAddr) {
    for _ in 0..20 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
