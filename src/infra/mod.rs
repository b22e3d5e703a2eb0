// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any business layer:
//
//   checkpoint.rs  — Saving and loading the model directory
//                    (burn record for weights, JSON for the
//                    feature names and threshold)
//
//   metrics.rs     — Confusion matrix and classification report
//                    used by the Model Evaluation page
//
//   submissions.rs — Append-only text files for the feedback
//                    and contact forms, one lock per file
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model directory saving and loading
pub mod checkpoint;

/// Classification metrics
pub mod metrics;

/// Append-only feedback / contact logs
pub mod submissions;
