// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one business
// layer:
//
//   metrics.rs — held-out evaluation results and the optional
//                CSV logger that appends one row per training
//                run for comparison across runs.

/// Evaluation metrics and the training-run CSV logger
pub mod metrics;
