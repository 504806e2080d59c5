//! Fan-out reporter delegating to multiple sinks.
//!
//! # Responsibilities
//! - Dispatch every reporting operation to an ordered, fixed list of sinks
//! - Aggregate failure counts across the sink set
//! - Keep one sink's failure from silently hiding another's
//!
//! # Design Decisions
//! - Sink order is fixed at construction and is the dispatch order everywhere
//! - report() fails fast: sinks after the failing one are not invoked
//! - flush()/close() are best-effort: every sink is attempted exactly once,
//!   individual failures are logged and aggregated into a Partial error
//! - The composite holds no span data and no locks; it is a pure dispatcher

use crate::reporting::error::{CloseError, DeliveryError, FlushError};
use crate::reporting::Reporter;
use crate::span::FinishedSpan;

/// Reporter that delegates to multiple other reporters.
///
/// Useful for reporting spans both to a console sink for debugging and to
/// one or more backend sinks. Calling `report` after `close` is a caller
/// error; ordering between the two is not guarded here.
pub struct CompositeReporter {
    reporters: Vec<Box<dyn Reporter>>,
}

impl CompositeReporter {
    /// Create a composite over the given sinks. The order given here is the
    /// dispatch order for every operation.
    pub fn new(reporters: Vec<Box<dyn Reporter>>) -> Self {
        Self { reporters }
    }

    /// A fresh view of the configured sinks, in dispatch order.
    ///
    /// The returned vector is a new allocation; dropping or reordering it
    /// has no effect on the live dispatch list.
    pub fn reporters(&self) -> Vec<&dyn Reporter> {
        self.reporters.iter().map(Box::as_ref).collect()
    }

    /// Number of configured sinks.
    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    /// True when no sinks are configured.
    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl Reporter for CompositeReporter {
    /// Delivers `span` to every sink in registration order.
    ///
    /// Fail-fast: the first sink error propagates unchanged and sinks after
    /// the failing one are not invoked for this call. Which sinks received
    /// the span is visible by position order at failure.
    fn report(&self, span: &FinishedSpan) -> Result<(), DeliveryError> {
        for reporter in &self.reporters {
            reporter.report(span)?;
        }
        Ok(())
    }

    /// Sum of every sink's cumulative failure counter, queried fresh on
    /// every call.
    fn failure_count(&self) -> u64 {
        self.reporters.iter().map(|r| r.failure_count()).sum()
    }

    /// Flushes every sink, continuing past individual failures.
    ///
    /// Failures are logged as they happen; when any sink failed, the call
    /// returns [`FlushError::Partial`] after all sinks were attempted.
    fn flush(&self) -> Result<(), FlushError> {
        let mut failed = 0usize;
        for (position, reporter) in self.reporters.iter().enumerate() {
            if let Err(err) = reporter.flush() {
                tracing::warn!(position, %err, "sink flush failed");
                failed += 1;
            }
        }
        if failed == 0 {
            Ok(())
        } else {
            Err(FlushError::Partial {
                failed,
                total: self.reporters.len(),
            })
        }
    }

    /// Closes every sink, continuing past individual failures.
    ///
    /// Each sink gets exactly one close attempt per call; failures are
    /// logged and aggregated into [`CloseError::Partial`].
    fn close(&self) -> Result<(), CloseError> {
        let mut failed = 0usize;
        for (position, reporter) in self.reporters.iter().enumerate() {
            if let Err(err) = reporter.close() {
                tracing::warn!(position, %err, "sink close failed");
                failed += 1;
            }
        }
        if failed == 0 {
            Ok(())
        } else {
            Err(CloseError::Partial {
                failed,
                total: self.reporters.len(),
            })
        }
    }
}
