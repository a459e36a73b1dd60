//! Registration workflow controller
//!
//! Owns the modal's form, submission status and visibility. The submission
//! call and the post-success auto-close run as tokio tasks; their outcomes
//! come back as [`WorkflowEvent`]s which the event loop feeds to
//! [`RegistrationWorkflow::handle_event`].

use super::forms::{FieldId, FieldValue, FormState};
use crate::submission::{Receipt, SubmissionError, Submitter};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Default wait between a successful submission and the automatic close
pub const DEFAULT_DISMISS_DELAY: Duration = Duration::from_secs(3);

/// Outcome of the last submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Unset,
    Success,
    Error,
}

/// Result of calling [`RegistrationWorkflow::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the submission call is in flight
    Started,
    /// Required fields were missing; status is now error
    Invalid,
    /// The submit control is disabled right now
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Hidden,
    Pending,
    AlreadySubmitted,
}

/// Completion messages delivered back to the event loop
#[derive(Debug)]
pub enum WorkflowEvent {
    Submitted {
        session: u64,
        result: Result<Receipt, SubmissionError>,
    },
    DismissElapsed {
        session: u64,
    },
}

/// Task handle that aborts its task when dropped
#[derive(Debug)]
struct ScheduledTask(JoinHandle<()>);

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

type CloseCallback = Box<dyn FnMut() + Send>;

/// State machine behind the registration modal
pub struct RegistrationWorkflow {
    form: FormState,
    status: SubmissionStatus,
    visible: bool,
    /// Bumped on every open; events from older sessions are stale
    session: u64,
    in_flight: Option<ScheduledTask>,
    dismiss: Option<ScheduledTask>,
    dismiss_delay: Duration,
    submitter: Arc<dyn Submitter>,
    events: UnboundedSender<WorkflowEvent>,
    on_close: Option<CloseCallback>,
}

impl RegistrationWorkflow {
    pub fn new(submitter: Arc<dyn Submitter>, events: UnboundedSender<WorkflowEvent>) -> Self {
        Self {
            form: FormState::default(),
            status: SubmissionStatus::Unset,
            visible: false,
            session: 0,
            in_flight: None,
            dismiss: None,
            dismiss_delay: DEFAULT_DISMISS_DELAY,
            submitter,
            events,
            on_close: None,
        }
    }

    pub fn with_dismiss_delay(mut self, delay: Duration) -> Self {
        self.dismiss_delay = delay;
        self
    }

    /// Register a callback run every time the modal closes
    pub fn on_close(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.visible && self.in_flight.is_none() && self.status != SubmissionStatus::Success
    }

    pub fn open(&mut self) {
        if !self.visible {
            self.session += 1;
            self.visible = true;
            tracing::debug!(session = self.session, "registration modal opened");
        }
        self.status = SubmissionStatus::Unset;
    }

    pub fn close(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        self.in_flight = None;

        // Closing during the dismissal window finishes the registration early.
        if self.dismiss.take().is_some() || self.status == SubmissionStatus::Success {
            self.form = FormState::default();
        }
        self.status = SubmissionStatus::Unset;
        tracing::debug!(session = self.session, "registration modal closed");

        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    pub fn update_field(&mut self, id: FieldId, value: impl Into<FieldValue>) {
        self.form.set(id, value.into());
    }

    /// Validate the form and start the submission call
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.visible {
            return SubmitOutcome::Rejected(RejectReason::Hidden);
        }
        if self.status == SubmissionStatus::Success {
            return SubmitOutcome::Rejected(RejectReason::AlreadySubmitted);
        }
        if self.in_flight.is_some() {
            return SubmitOutcome::Rejected(RejectReason::Pending);
        }

        if let Err(err) = self.form.validate() {
            tracing::debug!("registration rejected: {err}");
            self.status = SubmissionStatus::Error;
            return SubmitOutcome::Invalid;
        }

        let submitter = Arc::clone(&self.submitter);
        let events = self.events.clone();
        let form = self.form.clone();
        let session = self.session;

        let handle = tokio::spawn(async move {
            let result = submitter.submit(&form).await;
            let _ = events.send(WorkflowEvent::Submitted { session, result });
        });
        self.in_flight = Some(ScheduledTask(handle));
        SubmitOutcome::Started
    }

    /// Apply a completion event produced by one of this workflow's tasks
    pub fn handle_event(&mut self, event: WorkflowEvent) {
        match event {
            WorkflowEvent::Submitted { session, result } => {
                if session != self.session || self.in_flight.is_none() {
                    tracing::debug!(session, "discarding stale submission result");
                    return;
                }
                self.in_flight = None;
                match result {
                    Ok(receipt) => {
                        tracing::info!(id = %receipt.id, "registration completed");
                        self.status = SubmissionStatus::Success;
                        self.schedule_dismiss();
                    }
                    Err(err) => {
                        tracing::warn!("registration failed: {err}");
                        self.status = SubmissionStatus::Error;
                    }
                }
            }
            WorkflowEvent::DismissElapsed { session } => {
                if session != self.session || self.dismiss.take().is_none() {
                    return;
                }
                self.close();
                self.form = FormState::default();
            }
        }
    }

    fn schedule_dismiss(&mut self) {
        let events = self.events.clone();
        let session = self.session;
        let delay = self.dismiss_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(WorkflowEvent::DismissElapsed { session });
        });
        self.dismiss = Some(ScheduledTask(handle));
    }
}
