//! Trait abstraction for the submission service to enable mocking in tests

use crate::state::FormState;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Acknowledgement returned for an accepted registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a registration was not accepted
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("registration service unavailable")]
    Unavailable,
    #[error("failed to encode registration: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Accepts a completed registration
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit the registrant's data
    async fn submit(&self, form: &FormState) -> Result<Receipt, SubmissionError>;
}
