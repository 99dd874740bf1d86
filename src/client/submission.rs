use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::model::generate_id;

/// Simulated round trip for order and listing submissions.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission was cancelled")]
    Cancelled,
    #[error("nothing has been submitted")]
    NothingPending,
    #[error("submission task failed: {0}")]
    Failed(String),
}

/// Acknowledgement produced once the simulated latency has elapsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation<T> {
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
    pub item: T,
}

/// Runs at most one simulated submission at a time. The pending task is
/// aborted when a new item is submitted, on `cancel`, and on drop, so a
/// confirmation never arrives for a view that has moved on.
#[derive(Debug)]
pub struct Submitter<T> {
    latency: Duration,
    pending: Option<JoinHandle<Confirmation<T>>>,
}

impl<T: Send + 'static> Submitter<T> {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            pending: None,
        }
    }

    /// Start submitting `item`, replacing any submission still in flight.
    pub fn submit(&mut self, item: T) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        let latency = self.latency;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            Confirmation {
                reference: generate_id(),
                submitted_at: Utc::now(),
                item,
            }
        }));
    }

    /// Abort the in-flight submission. Returns false when there was none.
    pub fn cancel(&mut self) -> bool {
        match &self.pending {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Wait for the current submission to finish.
    pub async fn wait(&mut self) -> Result<Confirmation<T>, SubmissionError> {
        let handle = self.pending.take().ok_or(SubmissionError::NothingPending)?;
        handle.await.map_err(|e| {
            if e.is_cancelled() {
                SubmissionError::Cancelled
            } else {
                SubmissionError::Failed(e.to_string())
            }
        })
    }
}

impl<T: Send + 'static> Default for Submitter<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl<T> Drop for Submitter<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
