//! Trace context subsystem.
//!
//! # Responsibilities
//! - Carry trace/span identity for a single span
//! - Hold propagated baggage as string key-value pairs
//! - Produce derived contexts when baggage is added (copy-on-write)
//!
//! # Design Decisions
//! - Contexts are immutable; baggage updates clone into a fresh map
//! - Absent baggage is an empty map, never an Option
//! - Display omits baggage (it may carry sensitive data)
//! - Identifier uniqueness is the generator's job, not validated here

pub mod span_context;

pub use span_context::SpanContext;
