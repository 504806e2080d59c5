//! Shared test doubles for reporter integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracing_client::reporting::{CloseError, DeliveryError, FlushError, Reporter};
use tracing_client::span::FinishedSpan;

/// A sink whose behavior is scripted at construction.
///
/// Records which operations were invoked and which spans arrived so tests
/// can assert on fan-out order and best-effort semantics.
pub struct ScriptedSink {
    fail_report: bool,
    fail_flush: bool,
    fail_close: bool,
    seeded_failure_count: u64,
    reported: Mutex<Vec<String>>,
    flush_calls: AtomicUsize,
    close_calls: AtomicUsize,
}

impl ScriptedSink {
    /// A sink where every operation succeeds.
    pub fn healthy() -> Self {
        Self::scripted(false, false, false, 0)
    }

    /// A sink whose `report` always fails with a transport error.
    pub fn failing_report() -> Self {
        Self::scripted(true, false, false, 0)
    }

    /// A sink whose `flush` always fails.
    pub fn failing_flush() -> Self {
        Self::scripted(false, true, false, 0)
    }

    /// A sink whose `close` always fails.
    pub fn failing_close() -> Self {
        Self::scripted(false, false, true, 0)
    }

    /// A healthy sink reporting a fixed cumulative failure count.
    pub fn with_failure_count(count: u64) -> Self {
        Self::scripted(false, false, false, count)
    }

    fn scripted(fail_report: bool, fail_flush: bool, fail_close: bool, failures: u64) -> Self {
        Self {
            fail_report,
            fail_flush,
            fail_close,
            seeded_failure_count: failures,
            reported: Mutex::new(Vec::new()),
            flush_calls: AtomicUsize::new(0),
            close_calls: AtomicUsize::new(0),
        }
    }

    /// Operation names of the spans this sink received, in arrival order.
    pub fn reported_operations(&self) -> Vec<String> {
        self.reported.lock().unwrap().clone()
    }

    /// How many times `flush` was invoked on this sink.
    pub fn flush_calls(&self) -> usize {
        self.flush_calls.load(Ordering::SeqCst)
    }

    /// How many times `close` was invoked on this sink.
    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

impl Reporter for ScriptedSink {
    fn report(&self, span: &FinishedSpan) -> Result<(), DeliveryError> {
        if self.fail_report {
            return Err(DeliveryError::Transport("scripted report failure".into()));
        }
        self.reported
            .lock()
            .unwrap()
            .push(span.operation_name.clone());
        Ok(())
    }

    fn failure_count(&self) -> u64 {
        self.seeded_failure_count
    }

    fn flush(&self) -> Result<(), FlushError> {
        self.flush_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_flush {
            return Err(FlushError::Sink("scripted flush failure".into()));
        }
        Ok(())
    }

    fn close(&self) -> Result<(), CloseError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(CloseError::Sink("scripted close failure".into()));
        }
        Ok(())
    }
}
