//! Elapsed-time measurement between two instants

use commonkit_core::{Error, Result};
use std::time::Instant;

/// A start/end instant pair for measuring elapsed wall-clock time.
///
/// Lifecycle: create, call [`start`](TimeSpan::start), call
/// [`end`](TimeSpan::end), then read
/// [`elapsed_millis`](TimeSpan::elapsed_millis). Reading before both
/// marks have been recorded fails explicitly instead of returning a
/// meaningless duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeSpan {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl TimeSpan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start instant. Calling again restarts the span.
    pub fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    /// Record the end instant.
    pub fn end(&mut self) {
        self.end = Some(Instant::now());
    }

    /// Fractional milliseconds between the recorded start and end.
    pub fn elapsed_millis(&self) -> Result<f64> {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            (None, _) => return Err(Error::timing("start was never recorded")),
            (_, None) => return Err(Error::timing("end was never recorded")),
        };

        let span = end
            .checked_duration_since(start)
            .ok_or_else(|| Error::timing("end instant precedes start instant"))?;

        Ok(span.as_secs_f64() * 1000.0)
    }
}
