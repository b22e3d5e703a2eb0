// ============================================================
// Layer 3 — Churn Label
// ============================================================
// The classifier's output for one row: 1 means the customer is
// predicted to leave, 0 means they stay. Everything the UI says
// about a prediction is derived from this enum.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChurnLabel {
    Stays,
    Churns,
}

impl ChurnLabel {
    /// Both labels in class-index order (0, then 1).
    pub const ALL: [ChurnLabel; 2] = [ChurnLabel::Stays, ChurnLabel::Churns];

    pub fn class(&self) -> u8 {
        match self {
            ChurnLabel::Stays  => 0,
            ChurnLabel::Churns => 1,
        }
    }

    pub fn is_churn(&self) -> bool {
        matches!(self, ChurnLabel::Churns)
    }

    /// Result line for a single prediction.
    pub fn message(&self) -> &'static str {
        match self {
            ChurnLabel::Churns => "Customer is likely to churn.",
            ChurnLabel::Stays  => "Customer is not likely to churn.",
        }
    }

    /// Result line for the n-th customer (1-based) of a list.
    pub fn numbered_message(&self, n: usize) -> String {
        match self {
            ChurnLabel::Churns => format!("Customer {n} is likely to churn."),
            ChurnLabel::Stays  => format!("Customer {n} is not likely to churn."),
        }
    }
}
