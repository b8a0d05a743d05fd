//! Ordered fallback over a shape chain.

use crate::attempt::attempt_shape;
use derive_getters::Getters;
use kineto_core::{GenerationRequest, InvocationSuccess, ProbeEntry, ProbeReport, ShapeChain};
use kineto_error::{InvokeError, InvokeErrorKind, InvokeResult, RemoteError};
use kineto_interface::RemoteClient;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, instrument, warn};
use typed_builder::TypedBuilder;

/// Tries each call shape of a chain against one remote client, in order.
///
/// Holds no mutable state; the same invoker serves any number of requests.
#[derive(Debug, Clone, Getters, TypedBuilder)]
pub struct FallbackInvoker<C> {
    /// Remote endpoint capability.
    client: C,

    /// Shapes in priority order.
    chain: ShapeChain,

    /// Deadline applied to each attempt separately.
    #[builder(default, setter(strip_option))]
    attempt_timeout: Option<Duration>,
}

impl<C> FallbackInvoker<C>
where
    C: RemoteClient,
{
    /// Runs the chain until one shape succeeds.
    ///
    /// # Errors
    ///
    /// See [`invoke`].
    pub async fn invoke(&self, request: &GenerationRequest) -> InvokeResult<InvocationSuccess> {
        run_chain(&self.client, &self.chain, request, self.attempt_timeout).await
    }

    /// Tries every shape, regardless of earlier successes, and reports each outcome.
    ///
    /// Used to discover which call signatures an endpoint accepts.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the request is invalid; no shape is tried.
    #[instrument(skip(self, request), fields(client = self.client.name(), shapes = self.chain.len()))]
    pub async fn probe(&self, request: &GenerationRequest) -> InvokeResult<ProbeReport> {
        request.validate()?;

        let mut entries = Vec::with_capacity(self.chain.len());

        for shape in &self.chain {
            let outcome = attempt_shape(&self.client, shape, request, self.attempt_timeout).await;
            let entry = match outcome {
                Ok(payload) => {
                    info!(shape = %shape.name(), "Probe accepted");
                    ProbeEntry::success(shape.name().as_str(), shape.endpoint().to_string(), payload)
                }
                Err(failure) => {
                    info!(shape = %failure.shape(), error = %failure.message(), "Probe rejected");
                    ProbeEntry::failure(failure)
                }
            };
            entries.push(entry);
        }

        let report = ProbeReport::new(entries);
        info!(
            accepted = report.accepted().count(),
            winner = report.winner().map(|entry| entry.shape().as_str()),
            "Probe complete"
        );
        Ok(report)
    }

    /// Asks the remote to describe its endpoints.
    ///
    /// # Errors
    ///
    /// Returns the client's error, `Unsupported` if it cannot describe itself.
    #[instrument(skip(self), fields(client = self.client.name()))]
    pub async fn describe_api(&self) -> Result<Value, RemoteError> {
        self.client.describe_api().await
    }
}

/// Runs `shapes` against `client` until one succeeds, without attempt deadlines.
///
/// Shapes are attempted strictly in order and never retried. The first
/// success ends the invocation; its record carries the failures of the
/// shapes tried before it.
///
/// # Errors
///
/// - [`InvokeErrorKind::Validation`] if the request is invalid; no shape is tried.
/// - [`InvokeErrorKind::AllShapesExhausted`] with one failure per shape, in order.
pub async fn invoke<C>(
    request: &GenerationRequest,
    shapes: &ShapeChain,
    client: &C,
) -> InvokeResult<InvocationSuccess>
where
    C: RemoteClient + ?Sized,
{
    run_chain(client, shapes, request, None).await
}

#[instrument(skip(client, chain, request), fields(client = client.name(), shapes = chain.len()))]
async fn run_chain<C>(
    client: &C,
    chain: &ShapeChain,
    request: &GenerationRequest,
    deadline: Option<Duration>,
) -> InvokeResult<InvocationSuccess>
where
    C: RemoteClient + ?Sized,
{
    request.validate()?;

    let mut failures = Vec::with_capacity(chain.len());

    for shape in chain {
        match attempt_shape(client, shape, request, deadline).await {
            Ok(payload) => {
                info!(
                    shape = %shape.name(),
                    attempts = failures.len() + 1,
                    payload = %payload,
                    "Call shape succeeded"
                );
                return Ok(InvocationSuccess::new(payload, shape.name().as_str(), failures));
            }
            Err(failure) => {
                warn!(
                    shape = %failure.shape(),
                    error = %failure.message(),
                    "Call shape failed, falling back"
                );
                failures.push(failure);
            }
        }
    }

    error!(attempts = failures.len(), "All call shapes exhausted");
    Err(InvokeError::new(InvokeErrorKind::AllShapesExhausted(failures)))
}
