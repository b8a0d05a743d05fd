//! Wiring of configured remotes into a fallback invoker.

use crate::{KinetoConfig, RemoteConfig, RemoteKind};
use kineto_error::{ConfigError, KinetoResult};
use kineto_interface::RemoteClient;
use kineto_invoker::FallbackInvoker;
use kineto_models::huggingface::DEFAULT_INFERENCE_URL;
use kineto_models::{GradioClient, HuggingFaceClient};
use tracing::{info, instrument};

/// Invoker over whichever remote the configuration names.
pub type DynInvoker = FallbackInvoker<Box<dyn RemoteClient>>;

/// Creates the client for a configured remote.
///
/// # Errors
///
/// Returns an error if a Gradio remote has no address or the HTTP client
/// cannot be built.
#[instrument(skip(remote), fields(kind = ?remote.kind()))]
pub fn connect(remote: &RemoteConfig) -> KinetoResult<Box<dyn RemoteClient>> {
    match remote.kind() {
        RemoteKind::Gradio => {
            let address = remote.address().as_deref().ok_or_else(|| {
                ConfigError::new(format!(
                    "remote.address (or {}) is required for Gradio",
                    crate::config::ADDRESS_ENV
                ))
            })?;
            let mut client = GradioClient::new(address)?;
            if let Some(prefix) = remote.api_prefix() {
                client = client.with_api_prefix(prefix.clone());
            }
            if let Some(token) = remote.token() {
                client = client.with_token(token.clone());
            }
            info!(address = %client.base_url(), "Connected to Gradio app");
            Ok(Box::new(client))
        }
        RemoteKind::HuggingFace => {
            let address = remote.address().as_deref().unwrap_or(DEFAULT_INFERENCE_URL);
            let client = HuggingFaceClient::new_with_url(address, remote.token().clone())?;
            info!(address = %client.base_url(), "Connected to HuggingFace Inference API");
            Ok(Box::new(client))
        }
    }
}

impl KinetoConfig {
    /// Builds an invoker for `client` from the configured chain and deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape chain is invalid.
    pub fn invoker_with<C: RemoteClient>(&self, client: C) -> Result<FallbackInvoker<C>, ConfigError> {
        let chain = self.shape_chain()?;
        let invoker = match self.attempt_timeout() {
            Some(deadline) => FallbackInvoker::builder()
                .client(client)
                .chain(chain)
                .attempt_timeout(deadline)
                .build(),
            None => FallbackInvoker::builder().client(client).chain(chain).build(),
        };
        Ok(invoker)
    }

    /// Connects to the configured remote and builds its invoker.
    ///
    /// # Errors
    ///
    /// Returns an error if the client or the shape chain cannot be built.
    pub fn invoker(&self) -> KinetoResult<DynInvoker> {
        let client = connect(self.remote())?;
        Ok(self.invoker_with(client)?)
    }
}
