//! Request validation error types.

/// Specific conditions that make a generation request unusable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Prompt is empty or contains only whitespace
    #[display("Please enter a prompt: the prompt is empty")]
    EmptyPrompt,
    /// A numeric parameter that must be strictly positive is not
    #[display("Parameter '{field}' must be positive, got {value}")]
    NonPositive {
        /// Parameter name
        field: &'static str,
        /// Offending value, rendered as text
        value: String,
    },
    /// A call shape needs a value the request does not carry
    #[display("Request has no value for slot '{}'", _0)]
    MissingSlot(String),
}

/// Error for requests rejected before any remote call is made.
///
/// # Examples
///
/// ```
/// use kineto_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyPrompt);
/// assert!(format!("{}", err).contains("prompt"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
