// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Turns customers into the numeric rows the model reads.
//
// Reference: Rust Book §7 (Module System)

// CustomerInput → 11-column FeatureVector
pub mod encoder;

// Seeded synthetic rows for the evaluation page
pub mod dataset;
