//! Reqwest-backed implementation of the `EventLog` trait.

use std::time::Duration;

use async_trait::async_trait;
use quill_core::error::EventLogError;
use quill_core::event::EventEnvelope;
use quill_core::log::EventLog;

/// Default per-request timeout for log calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the external event log.
///
/// The log exposes `POST /events` to append one event and `GET /events` to
/// read the full history.
#[derive(Debug, Clone)]
pub struct HttpEventLog {
    base_url: String,
    http: reqwest::Client,
}

impl HttpEventLog {
    /// Creates a client for the log at `base_url`
    /// (e.g. `http://localhost:4005`).
    ///
    /// # Errors
    ///
    /// Returns `EventLogError::Transport` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, EventLogError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EventLogError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http,
        })
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.base_url)
    }
}

#[async_trait]
impl EventLog for HttpEventLog {
    async fn append(&self, envelope: &EventEnvelope) -> Result<(), EventLogError> {
        let response = self
            .http
            .post(self.events_url())
            .json(envelope)
            .send()
            .await
            .map_err(|e| EventLogError::Transport(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(EventLogError::Status(response.status().as_u16()))
        }
    }

    async fn read_all(&self) -> Result<Vec<EventEnvelope>, EventLogError> {
        let response = self
            .http
            .get(self.events_url())
            .send()
            .await
            .map_err(|e| EventLogError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EventLogError::Status(response.status().as_u16()));
        }

        response
            .json::<Vec<EventEnvelope>>()
            .await
            .map_err(|e| EventLogError::Malformed(e.to_string()))
    }
}
