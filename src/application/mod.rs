// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish the two user
// goals: training the spam filter and classifying a message.
//
// Rules for this layer:
//   - No ML math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct parsing of record files (that's Layer 4)
//   - Only workflow coordination

// The classifier orchestrator: load → split → fit → evaluate → classify
pub mod classifier;
