//! Error types for the Kineto library.
//!
//! This crate provides the foundation error types used throughout the Kineto workspace.
//! Every error records the source location where it was raised.

mod config;
mod http;
mod invoke;
mod remote;
mod storage;
mod validation;

pub use config::ConfigError;
pub use http::HttpError;
pub use invoke::{InvokeError, InvokeErrorKind, InvokeResult, ShapeFailure};
pub use remote::{RemoteError, RemoteErrorKind, RemoteResult};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum KinetoErrorKind {
    /// HTTP error
    Http(HttpError),
    /// Configuration error
    Config(ConfigError),
    /// Request validation error
    Validation(ValidationError),
    /// Remote endpoint error
    Remote(RemoteError),
    /// Fallback invocation error
    Invoke(InvokeError),
    /// Media storage error
    Storage(StorageError),
}

impl std::fmt::Display for KinetoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KinetoErrorKind::Http(e) => write!(f, "{}", e),
            KinetoErrorKind::Config(e) => write!(f, "{}", e),
            KinetoErrorKind::Validation(e) => write!(f, "{}", e),
            KinetoErrorKind::Remote(e) => write!(f, "{}", e),
            KinetoErrorKind::Invoke(e) => write!(f, "{}", e),
            KinetoErrorKind::Storage(e) => write!(f, "{}", e),
        }
    }
}

/// Kineto error with kind discrimination.
#[derive(Debug)]
pub struct KinetoError(Box<KinetoErrorKind>);

impl KinetoError {
    /// Create a new error from a kind.
    pub fn new(kind: KinetoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &KinetoErrorKind {
        &self.0
    }
}

impl std::fmt::Display for KinetoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kineto Error: {}", self.0)
    }
}

impl std::error::Error for KinetoError {}

// Generic From implementation for any type that converts to KinetoErrorKind
impl<T> From<T> for KinetoError
where
    T: Into<KinetoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Kineto operations.
pub type KinetoResult<T> = std::result::Result<T, KinetoError>;
