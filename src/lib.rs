//! Distributed Tracing Client Library Core

pub mod context;
pub mod reporting;
pub mod span;

pub use context::SpanContext;
pub use reporting::{CompositeReporter, ConsoleReporter, InMemoryReporter, Reporter};
pub use span::FinishedSpan;
