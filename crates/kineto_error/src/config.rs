//! Configuration error types.

/// Configuration file or shape chain rejected, with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong with the configuration
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use kineto_error::ConfigError;
    ///
    /// let err = ConfigError::new("Shape chain cannot be empty");
    /// assert!(err.message.contains("cannot be empty"));
    /// assert!(err.to_string().starts_with("Configuration Error: Shape chain"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
