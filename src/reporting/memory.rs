//! In-memory sink capturing spans for inspection.

use std::sync::Mutex;

use crate::reporting::error::{CloseError, DeliveryError, FlushError};
use crate::reporting::Reporter;
use crate::span::FinishedSpan;

/// Reporter that stores every reported span in memory.
///
/// Used by tests and debugging tools to assert on what would have been
/// sent to a backend. Captured spans grow without bound until [`clear`]
/// is called.
///
/// [`clear`]: InMemoryReporter::clear
#[derive(Debug, Default)]
pub struct InMemoryReporter {
    spans: Mutex<Vec<FinishedSpan>>,
}

impl InMemoryReporter {
    /// Create an empty in-memory reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every span reported so far, in arrival order.
    pub fn spans(&self) -> Vec<FinishedSpan> {
        self.lock().clone()
    }

    /// Number of spans captured so far.
    pub fn span_count(&self) -> usize {
        self.lock().len()
    }

    /// Drop all captured spans.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Recovers the captured spans even when a reporting thread panicked.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<FinishedSpan>> {
        self.spans.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Reporter for InMemoryReporter {
    fn report(&self, span: &FinishedSpan) -> Result<(), DeliveryError> {
        self.lock().push(span.clone());
        Ok(())
    }

    fn failure_count(&self) -> u64 {
        0
    }

    fn flush(&self) -> Result<(), FlushError> {
        Ok(())
    }

    fn close(&self) -> Result<(), CloseError> {
        Ok(())
    }
}
