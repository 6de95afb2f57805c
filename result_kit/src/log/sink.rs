use super::Level;
use std::fmt::Debug;

/// Destination for log records.
///
/// Any `Fn(Level, &dyn Debug, &str)` closure is a sink.
pub trait LogSink: Send + Sync {
    /// Writes one record. Level gating has already happened.
    fn write(&self, level: Level, value: &dyn Debug, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(Level, &dyn Debug, &str) + Send + Sync,
{
    fn write(&self, level: Level, value: &dyn Debug, message: &str) {
        self(level, value, message)
    }
}

/// Forwards records to [`tracing`]. `Fatal` records are emitted as errors
/// with `fatal = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, level: Level, value: &dyn Debug, message: &str) {
        match level {
            Level::Trace => tracing::trace!(value = ?value, "{message}"),
            Level::Debug => tracing::debug!(value = ?value, "{message}"),
            Level::Info => tracing::info!(value = ?value, "{message}"),
            Level::Warn => tracing::warn!(value = ?value, "{message}"),
            Level::Error => tracing::error!(value = ?value, "{message}"),
            Level::Fatal => {
                tracing::error!(fatal = true, value = ?value, "{message}")
            }
            Level::Silent => {}
        }
    }
}
