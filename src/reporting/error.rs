//! Reporting error definitions.

use thiserror::Error;

/// Errors raised when a sink cannot accept or forward a span.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The transport to the destination failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The destination rejected the span.
    #[error("span rejected: {0}")]
    Validation(String),

    /// The sink was already closed when the span arrived.
    #[error("sink is closed")]
    Closed,
}

/// Errors raised during a best-effort flush.
#[derive(Debug, Error)]
pub enum FlushError {
    /// A single sink's flush failed.
    #[error("flush error: {0}")]
    Sink(String),

    /// Some sinks in a fan-out failed to flush; the rest were still attempted.
    #[error("flush failed for {failed} of {total} sinks")]
    Partial { failed: usize, total: usize },
}

/// Errors raised while closing a sink.
#[derive(Debug, Error)]
pub enum CloseError {
    /// A single sink's close failed.
    #[error("close error: {0}")]
    Sink(String),

    /// Some sinks in a fan-out failed to close; the rest were still attempted.
    #[error("close failed for {failed} of {total} sinks")]
    Partial { failed: usize, total: usize },
}

/// Result type for span delivery.
pub type DeliveryResult = Result<(), DeliveryError>;
