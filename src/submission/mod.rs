//! Registration submission collaborator

mod simulated;
mod traits;

pub use simulated::{SimulatedSubmitter, DEFAULT_SUBMIT_DELAY};
pub use traits::{Receipt, SubmissionError, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;
