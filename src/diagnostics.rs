//! Operator-facing diagnostic side channel.
//!
//! The index reports anomalous-but-legal calls (a duplicate insert, a delete
//! of an absent key, a failed node allocation) through a [`DiagnosticSink`]
//! injected at construction. The sink never influences results: every such
//! condition is also returned to the caller as a [`SkipListError`].
//!
//! [`SkipListError`]: crate::error::SkipListError

use std::fmt;

use crate::observability::{log_debug, log_error, log_info, log_warn};

/// Severity attached to a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Verbose internal detail.
    Debug,
    /// Routine, noteworthy event.
    Info,
    /// Caller did something the index rejected.
    Warn,
    /// The index could not complete an operation.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        f.write_str(s)
    }
}

/// Receiver for leveled text messages emitted by the index.
pub trait DiagnosticSink: Send + Sync {
    /// Record one message.
    fn record(&self, level: Level, message: &str);
}

/// Forwards diagnostics to `tracing` under the `skipmem` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, level: Level, message: &str) {
        match level {
            Level::Debug => log_debug!(component = "diagnostics", event = "diagnostic", message),
            Level::Info => log_info!(component = "diagnostics", event = "diagnostic", message),
            Level::Warn => log_warn!(component = "diagnostics", event = "diagnostic", message),
            Level::Error => log_error!(component = "diagnostics", event = "diagnostic", message),
        }
    }
}

/// Discards every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _level: Level, _message: &str) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn record(&self, level: Level, message: &str) {
        self(level, message)
    }
}
