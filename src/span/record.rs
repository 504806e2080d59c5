//! Completed-span record handed to reporters.

use serde::{Deserialize, Serialize};

use crate::context::SpanContext;

/// A fully-populated span that has finished.
///
/// Reporters treat this as an opaque payload: it is delivered to each sink
/// unchanged and never interpreted by the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedSpan {
    /// Identity and baggage of the span.
    pub context: SpanContext,
    /// Operation name, e.g. "GET /orders".
    pub operation_name: String,
    /// Start time in microseconds since the Unix epoch.
    pub start_time_micros: u64,
    /// Wall-clock duration in microseconds.
    pub duration_micros: u64,
    /// Key-value tags attached by instrumentation.
    pub tags: Vec<(String, String)>,
    /// Timestamped log entries recorded during the span.
    pub logs: Vec<SpanLog>,
}

/// One timestamped log entry within a span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanLog {
    /// Event time in microseconds since the Unix epoch.
    pub timestamp_micros: u64,
    /// Key-value fields of the event.
    pub fields: Vec<(String, String)>,
}

impl FinishedSpan {
    /// Create a record with no timing, tags, or logs filled in yet.
    pub fn new(context: SpanContext, operation_name: impl Into<String>) -> Self {
        Self {
            context,
            operation_name: operation_name.into(),
            start_time_micros: 0,
            duration_micros: 0,
            tags: Vec::new(),
            logs: Vec::new(),
        }
    }
}
