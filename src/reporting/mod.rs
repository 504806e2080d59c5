//! Span reporting subsystem.
//!
//! # Data Flow
//! ```text
//! Tracer finishes a span:
//!     → FinishedSpan handed to a Reporter
//!     → CompositeReporter fans it out to every configured sink, in order
//!     → Sinks forward to their destination (console, memory, backend, ...)
//! ```
//!
//! # Design Decisions
//! - report() is fail-fast so the caller learns immediately which delivery failed
//! - flush()/close() are best-effort: advisory operations attempt every sink
//! - Sink errors are surfaced unchanged, never wrapped or retried here
//! - No internal locking: thread-safety of the aggregate is exactly the
//!   conjunction of the configured sinks' own guarantees

pub mod composite;
pub mod console;
pub mod error;
pub mod memory;

pub use composite::CompositeReporter;
pub use console::ConsoleReporter;
pub use error::{CloseError, DeliveryError, FlushError};
pub use memory::InMemoryReporter;

use std::sync::Arc;

use crate::span::FinishedSpan;

/// A downstream consumer of completed span records.
pub trait Reporter: Send + Sync {
    /// Deliver one finished span to the destination this sink fronts.
    fn report(&self, span: &FinishedSpan) -> Result<(), DeliveryError>;

    /// Cumulative count of failed deliveries since this sink was created.
    fn failure_count(&self) -> u64;

    /// Push any buffered spans toward the destination. Best-effort.
    fn flush(&self) -> Result<(), FlushError>;

    /// Release the sink's resources.
    ///
    /// Reporting through a sink after closing it is a caller error; sinks
    /// are not required to guard against it.
    fn close(&self) -> Result<(), CloseError>;
}

/// Sinks are often shared between the tracer and health monitoring; a
/// shared handle reports through the same underlying sink.
impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, span: &FinishedSpan) -> Result<(), DeliveryError> {
        (**self).report(span)
    }

    fn failure_count(&self) -> u64 {
        (**self).failure_count()
    }

    fn flush(&self) -> Result<(), FlushError> {
        (**self).flush()
    }

    fn close(&self) -> Result<(), CloseError> {
        (**self).close()
    }
}
