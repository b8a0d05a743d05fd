//! Results of running a shape chain.

use crate::MediaPayload;
use derive_getters::Getters;
use kineto_error::ShapeFailure;

/// A payload together with the diagnostic trail that led to it.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct InvocationSuccess {
    /// Resolved media reference
    payload: MediaPayload,
    /// Name of the shape that succeeded
    shape: String,
    /// Failures of the shapes tried before it, in attempt order
    failures: Vec<ShapeFailure>,
}

impl InvocationSuccess {
    /// Creates a success record.
    pub fn new(payload: MediaPayload, shape: impl Into<String>, failures: Vec<ShapeFailure>) -> Self {
        Self {
            payload,
            shape: shape.into(),
            failures,
        }
    }

    /// Number of remote attempts made, the successful one included.
    pub fn attempts(&self) -> usize {
        self.failures.len() + 1
    }

    /// Consumes the record, returning the payload.
    pub fn into_payload(self) -> MediaPayload {
        self.payload
    }
}

/// Outcome of one shape during a probe.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ProbeEntry {
    /// Shape name
    shape: String,
    /// Endpoint the shape targeted
    endpoint: String,
    /// Payload, or the error description
    outcome: Result<MediaPayload, String>,
}

impl ProbeEntry {
    /// Records a successful shape.
    pub fn success(shape: impl Into<String>, endpoint: impl Into<String>, payload: MediaPayload) -> Self {
        Self {
            shape: shape.into(),
            endpoint: endpoint.into(),
            outcome: Ok(payload),
        }
    }

    /// Records a failed shape.
    pub fn failure(failure: ShapeFailure) -> Self {
        Self {
            shape: failure.shape().to_string(),
            endpoint: failure.endpoint().to_string(),
            outcome: Err(failure.message().to_string()),
        }
    }

    /// Returns true if the shape produced a payload.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-shape outcomes of a probe, in chain order.
#[derive(Debug, Clone, PartialEq, Default, Getters)]
pub struct ProbeReport {
    /// Entries in chain order
    entries: Vec<ProbeEntry>,
}

impl ProbeReport {
    /// Creates a report from ordered entries.
    pub fn new(entries: Vec<ProbeEntry>) -> Self {
        Self { entries }
    }

    /// Shapes the endpoint accepted.
    pub fn accepted(&self) -> impl Iterator<Item = &ProbeEntry> {
        self.entries.iter().filter(|entry| entry.is_success())
    }

    /// The highest-priority accepted shape, if any.
    pub fn winner(&self) -> Option<&ProbeEntry> {
        self.accepted().next()
    }
}
