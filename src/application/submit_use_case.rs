// ============================================================
// Layer 2 — SubmitUseCase
// ============================================================
// Feedback and Contact Us forms:
//   - incomplete submission → MissingFields, nothing written
//   - complete submission   → exactly one record appended, Accepted
//
// Write failures are not retried; they go back to the caller.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::submission::{ContactMessage, Feedback, SubmissionOutcome};
use crate::domain::traits::SubmissionStore;

#[derive(Clone)]
pub struct SubmitUseCase {
    feedback: Arc<dyn SubmissionStore>,
    contact:  Arc<dyn SubmissionStore>,
}

impl SubmitUseCase {
    pub fn new(feedback: Arc<dyn SubmissionStore>, contact: Arc<dyn SubmissionStore>) -> Self {
        Self { feedback, contact }
    }

    pub fn submit_feedback(&self, entry: &Feedback) -> Result<SubmissionOutcome> {
        if !entry.is_complete() {
            tracing::warn!("Rejected empty feedback");
            return Ok(SubmissionOutcome::MissingFields);
        }
        self.feedback.append(&entry.to_record())?;
        tracing::info!("Stored feedback ({} bytes)", entry.feedback.len());
        Ok(SubmissionOutcome::Accepted)
    }

    pub fn submit_contact(&self, msg: &ContactMessage) -> Result<SubmissionOutcome> {
        if !msg.is_complete() {
            tracing::warn!("Rejected incomplete contact message");
            return Ok(SubmissionOutcome::MissingFields);
        }
        self.contact.append(&msg.to_record())?;
        tracing::info!("Stored contact message");
        Ok(SubmissionOutcome::Accepted)
    }
}
