//! Storage error types for persisting generated media.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// Media not found at the specified location
    #[display("Media not found: {}", _0)]
    NotFound(String),
    /// I/O error during a storage operation
    #[display("I/O error: {}", _0)]
    Io(String),
    /// Payload cannot be written locally (e.g. a remote URL)
    #[display("Cannot persist payload: {}", _0)]
    NotPersistable(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use kineto_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("/tmp/gradio/video.mp4".to_string()));
/// assert!(format!("{}", err).contains("Media not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
