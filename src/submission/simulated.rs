//! Stand-in submission service
//!
//! There is no registration backend yet. This implementation waits for a
//! fixed delay, logs the payload and accepts it.

use super::traits::{Receipt, SubmissionError, Submitter};
use crate::state::FormState;
use async_trait::async_trait;
use std::time::Duration;

/// Default time the simulated call takes
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Submission service that only logs what it receives
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Make every submission fail after the delay
    pub fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, form: &FormState) -> Result<Receipt, SubmissionError> {
        let payload = serde_json::to_string(form)?;
        tracing::info!(%payload, "registration submitted");

        tokio::time::sleep(self.delay).await;

        if self.fail {
            tracing::warn!("simulated registration failure");
            return Err(SubmissionError::Unavailable);
        }

        let receipt = Receipt::new();
        tracing::info!(id = %receipt.id, at = %receipt.received_at, "registration accepted");
        Ok(receipt)
    }
}
