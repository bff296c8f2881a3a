//! Logging infrastructure for skipmem.
//!
//! Structural events are emitted through `tracing` with target "skipmem" and
//! carry `component` and `event` fields for filtering. Operator-facing
//! anomalies (duplicate inserts, deletes of absent keys) go through the
//! injected [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) instead.
//!
//! ## Library Integration
//!
//! skipmem never initializes a global subscriber. Applications configure
//! tracing via `tracing_subscriber` or similar.
//!
//! ## Conventions
//!
//! - `event`: snake_case event name (required)
//! - `component`: subsystem (e.g., "skiplist", "arena", "epoch")
//! - Use `%` for Display, `?` for Debug formatting

/// Target for all skipmem log events.
pub(crate) const SKIPMEM_TARGET: &str = "skipmem";

/// Macro for info-level log events.
///
/// # Example
/// ```ignore
/// log_info!(
///     component = "arena",
///     event = "segment_allocated",
///     segment = index,
///     slots = capacity,
/// );
/// ```
macro_rules! log_info {
    ($($field:tt)*) => {
        ::tracing::info!(target: $crate::observability::SKIPMEM_TARGET, $($field)*)
    };
}

/// Macro for debug-level log events.
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::SKIPMEM_TARGET, $($field)*)
    };
}

/// Macro for warn-level log events.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::SKIPMEM_TARGET, $($field)*)
    };
}

/// Macro for error-level log events.
macro_rules! log_error {
    ($($field:tt)*) => {
        ::tracing::error!(target: $crate::observability::SKIPMEM_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_error;
pub(crate) use log_info;
pub(crate) use log_warn;
