//! Fallback invocation error types.

use crate::ValidationError;

/// A single failed call shape, recorded during fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeFailure {
    shape: String,
    endpoint: String,
    message: String,
}

impl ShapeFailure {
    /// Records the failure of `shape` against `endpoint`.
    pub fn new(
        shape: impl Into<String>,
        endpoint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            shape: shape.into(),
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Name of the shape that failed.
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// Endpoint the shape targeted.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Error description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ShapeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.shape, self.endpoint, self.message)
    }
}

/// Conditions that end an invocation without a payload.
#[derive(Debug, Clone, derive_more::From)]
pub enum InvokeErrorKind {
    /// Request rejected before any call shape was attempted
    Validation(ValidationError),
    /// Every configured shape failed, in attempt order
    AllShapesExhausted(Vec<ShapeFailure>),
}

impl std::fmt::Display for InvokeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvokeErrorKind::Validation(e) => write!(f, "{}", e),
            InvokeErrorKind::AllShapesExhausted(failures) => {
                write!(f, "All {} call shapes failed", failures.len())?;
                for (index, failure) in failures.iter().enumerate() {
                    write!(f, "; #{} {}", index + 1, failure)?;
                }
                Ok(())
            }
        }
    }
}

/// Invocation error with location tracking.
///
/// # Examples
///
/// ```
/// use kineto_error::{InvokeError, InvokeErrorKind, ShapeFailure};
///
/// let err = InvokeError::new(InvokeErrorKind::AllShapesExhausted(vec![
///     ShapeFailure::new("prompt_only", "fn_index=0", "boom"),
/// ]));
/// assert_eq!(err.failures().len(), 1);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invoke Error: {} at line {} in {}", kind, line, file)]
pub struct InvokeError {
    /// The specific error kind
    pub kind: InvokeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InvokeError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InvokeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Returns true if the request never reached the remote endpoint.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, InvokeErrorKind::Validation(_))
    }

    /// Recorded shape failures, empty for validation errors.
    pub fn failures(&self) -> &[ShapeFailure] {
        match &self.kind {
            InvokeErrorKind::AllShapesExhausted(failures) => failures,
            InvokeErrorKind::Validation(_) => &[],
        }
    }
}

impl From<ValidationError> for InvokeError {
    #[track_caller]
    fn from(err: ValidationError) -> Self {
        Self::new(InvokeErrorKind::Validation(err))
    }
}

/// Result type for invocation operations.
pub type InvokeResult<T> = Result<T, InvokeError>;
