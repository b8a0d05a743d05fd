//! Trait interfaces for remote generation endpoints.
//!
//! - [`RemoteClient`] - one call against a remote endpoint, payload resolved at the boundary

use async_trait::async_trait;
use kineto_core::{Argument, Endpoint, MediaPayload};
use kineto_error::{RemoteError, RemoteErrorKind};
use serde_json::Value;

/// A capability to call a remote generation endpoint.
///
/// Transport, authentication and serialization belong to the implementation.
/// Implementations resolve whatever the remote returns into a single
/// [`MediaPayload`] before handing it back.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Short name used in logs (e.g. "gradio").
    fn name(&self) -> &str;

    /// Performs one call against `endpoint` with the ordered `arguments`.
    async fn call(
        &self,
        endpoint: &Endpoint,
        arguments: &[Argument],
    ) -> Result<MediaPayload, RemoteError>;

    /// Describes the endpoints the remote exposes, if it can.
    async fn describe_api(&self) -> Result<Value, RemoteError> {
        Err(RemoteError::new(RemoteErrorKind::Unsupported(format!(
            "{} cannot describe its API",
            self.name()
        ))))
    }
}

#[async_trait]
impl<T> RemoteClient for Box<T>
where
    T: RemoteClient + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn call(
        &self,
        endpoint: &Endpoint,
        arguments: &[Argument],
    ) -> Result<MediaPayload, RemoteError> {
        (**self).call(endpoint, arguments).await
    }

    async fn describe_api(&self) -> Result<Value, RemoteError> {
        (**self).describe_api().await
    }
}
