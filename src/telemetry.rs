//! Telemetry metric name constants.
//!
//! Centralised metric names for huginn operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `huginn_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation` — batch operation invoked ("sentiment" | "insight")
//! - `label` — sentiment label assigned ("positive" | "negative" | "neutral")

/// Total statements scored.
///
/// Labels: `label`.
pub const STATEMENTS_SCORED_TOTAL: &str = "huginn_statements_scored_total";

/// Total batch operations processed.
///
/// Labels: `operation`.
pub const BATCHES_TOTAL: &str = "huginn_batches_total";

/// Batch processing duration in seconds.
///
/// Labels: `operation`.
pub const BATCH_DURATION_SECONDS: &str = "huginn_batch_duration_seconds";
