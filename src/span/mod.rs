//! Completed-span records.
//!
//! # Responsibilities
//! - Define the payload handed to reporters when a span finishes
//!
//! # Design Decisions
//! - Plain data: the reporting layer passes records through unchanged
//! - Span lifecycle (builders, sampling, clocks) lives in the tracer, not here

pub mod record;

pub use record::{FinishedSpan, SpanLog};
