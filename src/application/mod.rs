// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal.
//
// Rules for this layer:
//   - No model math here (that's Layer 5)
//   - No argument parsing (that's Layer 1)
//   - Only workflow coordination

// Load → vocabulary → vectorize → hyperparameter sweep
pub mod train_use_case;

// Build the vocabulary alone and report on it
pub mod vocab_use_case;
