//! Injected logging capability and panic boundary
//!
//! Routines that emit diagnostics take an [`EventSink`] instead of
//! writing to a process-wide logger, so tests can substitute a no-op or
//! capturing sink.

use std::panic::{self, AssertUnwindSafe};

/// Destination for diagnostic events emitted by library routines.
pub trait EventSink {
    fn debug(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards events to the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn debug(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Run `f`, logging any panic through `sink` before re-raising it.
///
/// The panic is not recovered: after the payload is logged at error
/// level it is resumed, so the caller's own failure handling still
/// triggers.
pub fn catch_and_log<T>(sink: &dyn EventSink, f: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            sink.error(&format!("runtime error: {message}"));
            panic::resume_unwind(payload);
        }
    }
}
