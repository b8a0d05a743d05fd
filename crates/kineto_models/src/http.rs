//! Shared HTTP plumbing for remote clients.

use kineto_error::{HttpError, RemoteError, RemoteErrorKind};
use reqwest::{Client, RequestBuilder, Response};
use tracing::error;

/// Builds the HTTP client shared by every call of one remote client.
pub(crate) fn build_client() -> Result<Client, HttpError> {
    Client::builder()
        .user_agent(concat!("kineto/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))
}

/// Joins a base URL and a path without doubling slashes.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Adds a bearer token when one is configured.
pub(crate) fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Maps a transport failure.
pub(crate) fn transport_error(provider: &str, err: reqwest::Error) -> RemoteError {
    error!(provider, error = ?err, "HTTP request failed");
    RemoteError::new(RemoteErrorKind::Http(format!("Request failed: {}", err)))
}

/// Passes successful responses through; turns the rest into API errors.
pub(crate) async fn check_status(provider: &str, response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    error!(provider, status = %status, error = %error_text, "API error");

    Err(RemoteError::new(RemoteErrorKind::Api {
        status: status.as_u16(),
        message: error_text,
    }))
}
