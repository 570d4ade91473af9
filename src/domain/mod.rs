// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe what the system works on:
// a review is a bag of whitespace tokens with a star label.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain structs, newtypes and traits
//
// Everything above (data, ml, application) speaks in these
// types, so they stay free of framework noise and are cheap
// to unit test.

// A tokenized review and its gold label
pub mod review;

// The 0..5 class label derived from a 1-5 star rating
pub mod label;

// Core abstractions (traits) that other layers implement
pub mod traits;
