//! Immutable span context with copy-on-write baggage.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and propagated baggage for a single span.
///
/// A context never changes after construction. Adding a baggage item via
/// [`SpanContext::with_baggage_item`] produces a new context sharing the
/// same identifiers; each context owns its map, so two contexts derived
/// from the same parent cannot observe each other's baggage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanContext {
    trace_id: Uuid,
    span_id: Uuid,
    baggage: HashMap<String, String>,
}

impl SpanContext {
    /// Create a context with no baggage.
    pub fn new(trace_id: Uuid, span_id: Uuid) -> Self {
        Self {
            trace_id,
            span_id,
            baggage: HashMap::new(),
        }
    }

    /// Create a context carrying baggage, e.g. propagated from a remote caller.
    pub fn with_baggage(trace_id: Uuid, span_id: Uuid, baggage: HashMap<String, String>) -> Self {
        Self {
            trace_id,
            span_id,
            baggage,
        }
    }

    /// The 128-bit identifier of the trace this span belongs to.
    pub fn trace_id(&self) -> Uuid {
        self.trace_id
    }

    /// The 128-bit identifier of this span.
    pub fn span_id(&self) -> Uuid {
        self.span_id
    }

    /// Look up a single baggage item. Returns `None` when the key is absent.
    pub fn baggage_item(&self, key: &str) -> Option<&str> {
        self.baggage.get(key).map(String::as_str)
    }

    /// Iterate over all baggage entries.
    ///
    /// Enumeration order is stable for a given instance only.
    pub fn baggage_items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.baggage.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return a new context whose baggage equals this one's with `key` set
    /// to `value` (inserted or overwritten). The receiver is unchanged.
    pub fn with_baggage_item(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut baggage = self.baggage.clone();
        baggage.insert(key.into(), value.into());
        Self {
            trace_id: self.trace_id,
            span_id: self.span_id,
            baggage,
        }
    }
}

impl fmt::Display for SpanContext {
    /// Renders identifiers only; baggage may carry sensitive data.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SpanContext{{trace_id={}, span_id={}}}",
            self.trace_id, self.span_id
        )
    }
}
