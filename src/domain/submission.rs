// ============================================================
// Layer 3 — Feedback and Contact Submissions
// ============================================================
// The two free-text forms. Each type knows two things:
//   - whether it is complete enough to be stored
//   - how it is written as a plain-text record
//
// The text is stored verbatim. Escaping happens only when
// something is rendered as HTML, never on the way to disk.

use serde::{Deserialize, Serialize};

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Stored; show the success banner
    Accepted,
    /// A required field was empty; nothing was written
    MissingFields,
}

// ─── Feedback ─────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default)]
    pub feedback: String,
}

impl Feedback {
    pub const SUCCESS: &'static str = "Thank you for your feedback!";
    pub const WARNING: &'static str = "Please enter your feedback before submitting.";

    #[cfg(test)]
    pub fn new(text: impl Into<String>) -> Self {
        Self { feedback: text.into() }
    }

    pub fn is_complete(&self) -> bool {
        !self.feedback.is_empty()
    }

    /// One line per submission.
    pub fn to_record(&self) -> String {
        format!("{}\n", self.feedback)
    }
}

// ─── ContactMessage ───────────────────────────────────────────────────────────
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name:    String,
    #[serde(default)]
    pub email:   String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    pub const SUCCESS: &'static str = "Thank you for your message! We will get back to you soon.";
    pub const WARNING: &'static str = "Please fill in all fields before sending.";

    #[cfg(test)]
    pub fn new(
        name:    impl Into<String>,
        email:   impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name:    name.into(),
            email:   email.into(),
            message: message.into(),
        }
    }

    /// All three fields must be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// Three labelled lines followed by a blank separator line.
    pub fn to_record(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}\n\n",
            self.name, self.email, self.message
        )
    }
}
