//! Console sink for debugging.

use crate::reporting::error::{CloseError, DeliveryError, FlushError};
use crate::reporting::Reporter;
use crate::span::FinishedSpan;

/// Reporter that logs each finished span through `tracing`.
///
/// Intended for local debugging alongside a backend sink; it buffers
/// nothing and cannot fail.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a console reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, span: &FinishedSpan) -> Result<(), DeliveryError> {
        tracing::info!(
            trace_id = %span.context.trace_id(),
            span_id = %span.context.span_id(),
            operation = %span.operation_name,
            start_time_micros = span.start_time_micros,
            duration_micros = span.duration_micros,
            tags = ?span.tags,
            "span finished"
        );
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
