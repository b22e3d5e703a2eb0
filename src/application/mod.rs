// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// user-visible goal each.
//
// Rules for this layer:
//   - No ML math or burn code here
//   - No HTML or printing here (that's Layer 1)
//   - No direct file access (that's Layer 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// One customer → one churn label
pub mod predict_use_case;

// Synthetic dataset → confusion matrix + classification report
pub mod evaluate_use_case;

// Feedback and contact form submissions
pub mod submit_use_case;

// Exported coefficients → model directory
pub mod import_use_case;

#[cfg(test)]
pub(crate) mod fakes;
