// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the training loop:
//
//   metrics.rs  — accuracy / loss / timing records per phase,
//                 epoch and sweep configuration, reported
//                 through `tracing` (nothing is written to disk)
//
//   progress.rs — indicatif progress bars for the mini-batch
//                 loops of each phase

/// Per-phase, per-epoch and per-sweep metrics records
pub mod metrics;

/// Terminal progress bars for training and validation phases
pub mod progress;
