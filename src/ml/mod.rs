// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL burn framework specific code.
// No other layer imports from burn directly, apart from the
// checkpoint manager that persists burn records.
//
// What's in this layer:
//
//   model.rs      — The churn classifier architecture
//                   Logistic regression as a burn Module:
//                   one Linear layer followed by a sigmoid
//
//   export.rs     — Reading coefficients exported by another
//                   library and folding a standard scaler into
//                   raw-input weights
//
//   inferencer.rs — The inference engine
//                   Checks the batch layout against the model's
//                   feature names, runs the forward pass on the
//                   CPU backend and thresholds p(churn) to 0/1
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Records and Checkpointing)

/// Logistic-regression churn classifier
pub mod model;

/// Exported coefficient files
pub mod export;

/// Inference engine: loads a checkpoint and predicts labels
pub mod inferencer;
