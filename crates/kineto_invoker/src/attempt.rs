//! A single shape attempt.

use kineto_core::{CallShape, GenerationRequest, MediaPayload};
use kineto_error::{RemoteError, RemoteErrorKind, ShapeFailure};
use kineto_interface::RemoteClient;
use std::time::Duration;
use tracing::{debug, instrument};

/// Builds the arguments for `shape` and performs one remote call.
///
/// A shape the request cannot fill fails without reaching the client.
#[instrument(skip(client, shape, request), fields(shape = %shape.name(), endpoint = %shape.endpoint()))]
pub(crate) async fn attempt_shape<C>(
    client: &C,
    shape: &CallShape,
    request: &GenerationRequest,
    deadline: Option<Duration>,
) -> Result<MediaPayload, ShapeFailure>
where
    C: RemoteClient + ?Sized,
{
    let endpoint = shape.endpoint();
    let failure = |message: String| {
        ShapeFailure::new(shape.name().as_str(), endpoint.to_string(), message)
    };

    let arguments = shape
        .arguments(request)
        .map_err(|e| failure(e.kind.to_string()))?;

    debug!(argument_count = arguments.len(), "Calling remote endpoint");

    let call = client.call(endpoint, &arguments);
    let result = match deadline {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .unwrap_or_else(|_| {
                Err(RemoteError::new(RemoteErrorKind::Timeout(
                    u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                )))
            }),
        None => call.await,
    };

    result.map_err(|e| failure(e.kind.to_string()))
}
