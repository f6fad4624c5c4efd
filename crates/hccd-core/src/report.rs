//! Progress reporting for generation runs
//!
//! The pipeline never prints. It emits events through a [`Reporter`] chosen
//! by the caller. [`TracingReporter`] forwards them to `tracing`, which is
//! what the CLI does outside verbose mode.

/// Severity of a reported event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventLevel {
    Trace,
    Debug,
    Info,
    /// Something the user should know about, but the run went on
    Warn,
}

impl EventLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventLevel::Trace => "trace",
            EventLevel::Debug => "debug",
            EventLevel::Info => "info",
            EventLevel::Warn => "warn",
        }
    }
}

/// Receiver of generation progress events
///
/// The default implementation ignores everything, so implementors only
/// handle what they care about.
pub trait Reporter: Send + Sync {
    fn on_event(&self, _message: &str, _level: EventLevel) {}
}

/// Reporter that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {}

/// Reporter that emits `tracing` events at the matching level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn on_event(&self, message: &str, level: EventLevel) {
        match level {
            EventLevel::Trace => tracing::trace!("{}", message),
            EventLevel::Debug => tracing::debug!("{}", message),
            EventLevel::Info => tracing::info!("{}", message),
            EventLevel::Warn => tracing::warn!("{}", message),
        }
    }
}
