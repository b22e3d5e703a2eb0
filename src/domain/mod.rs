// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define what the
// system talks about: a customer, its encoded feature vector,
// a churn label, and the two kinds of text submission.
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O, no HTTP
//   - NO clap types (parsing goes through FromStr)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Raw form selections (geography, gender, yes/no flags, numbers)
pub mod customer;

// The fixed-order feature vector and rectangular batches of them
pub mod features;

// The classifier's 0/1 output and its display messages
pub mod prediction;

// Feedback and contact form payloads
pub mod submission;

// Core abstractions (traits) that other layers implement
pub mod traits;
