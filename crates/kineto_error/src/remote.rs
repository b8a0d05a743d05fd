//! Remote endpoint error types.

/// Failure conditions of a single call against a remote generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RemoteErrorKind {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Endpoint answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or error message
        message: String,
    },

    /// Endpoint reported an error inside an otherwise successful response
    #[display("Remote reported an error: {}", _0)]
    Remote(String),

    /// Response could not be resolved into a media payload
    #[display("Unusable response payload: {}", _0)]
    Payload(String),

    /// The client cannot express this call
    #[display("Unsupported call: {}", _0)]
    Unsupported(String),

    /// The attempt exceeded its deadline
    #[display("Attempt timed out after {} ms", _0)]
    Timeout(u64),
}

impl RemoteErrorKind {
    /// Returns true if the failure was caused by an expired deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RemoteErrorKind::Timeout(_))
    }
}

/// Remote call error with location tracking.
///
/// # Examples
///
/// ```
/// use kineto_error::{RemoteError, RemoteErrorKind};
///
/// let err = RemoteError::new(RemoteErrorKind::Api {
///     status: 422,
///     message: "Unexpected argument".to_string(),
/// });
/// assert!(format!("{}", err).contains("422"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Remote Error: {} at line {} in {}", kind, line, file)]
pub struct RemoteError {
    /// The specific error kind
    pub kind: RemoteErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RemoteError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RemoteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for remote calls.
pub type RemoteResult<T> = Result<T, RemoteError>;
