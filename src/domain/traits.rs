// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the model and to the text
// stores only through these traits. That keeps it testable
// without a model file on disk and without touching the real
// feedback files:
//   - Inferencer    implements ChurnPredictor (burn model)
//   - SubmissionLog implements SubmissionStore (append-only file)
//   - tests supply small in-memory versions of both
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;

use crate::domain::features::FeatureBatch;
use crate::domain::prediction::ChurnLabel;

// ─── ChurnPredictor ───────────────────────────────────────────────────────────
/// Anything with a predict operation over a rectangular batch.
///
/// Implementations must return exactly one label per row, and
/// must fail (not guess) when the batch's columns differ from
/// the ones the model was built for.
pub trait ChurnPredictor: Send + Sync {
    fn predict(&self, batch: &FeatureBatch) -> Result<Vec<ChurnLabel>>;
}

// ─── SubmissionStore ──────────────────────────────────────────────────────────
/// An append-only sink for plain-text records.
pub trait SubmissionStore: Send + Sync {
    /// Append one record exactly as given.
    fn append(&self, record: &str) -> Result<()>;
}
