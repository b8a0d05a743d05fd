//! Client for apps served by Gradio.

use crate::gradio::{GradioPredictRequest, GradioPredictResponse};
use crate::http::{authorize, build_client, check_status, join_url, transport_error};
use crate::payload::resolve_output;
use async_trait::async_trait;
use gradio::{ClientOptions, PredictionInput, PredictionOutput};
use kineto_core::{Argument, Endpoint, MediaPayload};
use kineto_error::{HttpError, RemoteError, RemoteErrorKind};
use kineto_interface::RemoteClient;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, instrument};

const PROVIDER: &str = "gradio";

/// Path prefix of the Gradio 5 REST API.
pub const DEFAULT_API_PREFIX: &str = "/gradio_api";

/// Remote client for a hosted Gradio app (e.g. a `*.gradio.live` share link).
///
/// Named routes and the API description go through the `gradio` client,
/// which is connected on first use. Function indices have no named route, so
/// they are posted to the app's `run/predict` endpoint directly. Arguments
/// are sent positionally.
#[derive(Clone)]
pub struct GradioClient {
    client: Client,
    app: Arc<OnceCell<gradio::Client>>,
    base_url: String,
    api_prefix: String,
    token: Option<String>,
}

impl std::fmt::Debug for GradioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradioClient")
            .field("base_url", &self.base_url)
            .field("api_prefix", &self.api_prefix)
            .field("connected", &self.app.initialized())
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

impl GradioClient {
    /// Creates a client for the app at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(skip_all)]
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, HttpError> {
        let client = build_client()?;
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();

        debug!(provider = PROVIDER, url = %base_url, "Created Gradio client");

        Ok(Self {
            client,
            app: Arc::new(OnceCell::new()),
            base_url,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            token: None,
        })
    }

    /// Sends `token` as a bearer credential (private Spaces).
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the REST prefix; Gradio 4 apps serve the API at the root (`""`).
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Returns the app address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        join_url(&join_url(&self.base_url, &self.api_prefix), path)
    }

    /// Connected `gradio` client, created on first use.
    async fn app(&self) -> Result<&gradio::Client, RemoteError> {
        self.app
            .get_or_try_init(|| async move {
                let options = match &self.token {
                    Some(token) => ClientOptions::with_hf_token(token.clone()),
                    None => ClientOptions::default(),
                };
                debug!(provider = PROVIDER, url = %self.base_url, "Connecting to Gradio app");
                gradio::Client::new(&self.base_url, options)
                    .await
                    .map_err(|e| {
                        error!(provider = PROVIDER, error = %e, "Failed to connect to Gradio app");
                        RemoteError::new(RemoteErrorKind::Http(format!(
                            "Failed to connect to {}: {}",
                            self.base_url, e
                        )))
                    })
            })
            .await
    }

    /// Calls a named route through the `gradio` client.
    #[instrument(skip(self, data))]
    async fn call_route(&self, route: &str, data: Vec<Value>) -> Result<MediaPayload, RemoteError> {
        let inputs = data.into_iter().map(PredictionInput::from_value).collect();

        let outputs = self.app().await?.predict(route, inputs).await.map_err(|e| {
            error!(provider = PROVIDER, error = %e, "App raised an error");
            RemoteError::new(RemoteErrorKind::Remote(e.to_string()))
        })?;

        debug!(output_count = outputs.len(), "Prediction complete");

        let first = outputs.into_iter().next().ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::Payload("output list is empty".into()))
        })?;
        resolve_prediction(first)
    }

    /// Calls a function by index through the app's predict endpoint.
    #[instrument(skip(self, data))]
    async fn call_fn_index(&self, index: u32, data: Vec<Value>) -> Result<MediaPayload, RemoteError> {
        let body = GradioPredictRequest::builder()
            .data(data)
            .fn_index(index)
            .build()
            .map_err(|e| RemoteError::new(RemoteErrorKind::Payload(e.to_string())))?;

        let url = self.api_url("run/predict");
        let response = authorize(self.client.post(&url), self.token.as_deref())
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        let answer: GradioPredictResponse = check_status(PROVIDER, response)
            .await?
            .json()
            .await
            .map_err(|e| {
                error!(provider = PROVIDER, error = ?e, "Failed to parse response");
                RemoteError::new(RemoteErrorKind::Payload(format!(
                    "Failed to parse predict response: {}",
                    e
                )))
            })?;

        if let Some(message) = answer.error() {
            error!(provider = PROVIDER, error = %message, "App raised an error");
            return Err(RemoteError::new(RemoteErrorKind::Remote(message.clone())));
        }

        match answer.data() {
            Some(output) => resolve_output(output),
            None => Err(RemoteError::new(RemoteErrorKind::Payload(
                "predict answer has no data".into(),
            ))),
        }
    }
}

/// Resolves one output of a `gradio` prediction into a media payload.
///
/// File outputs resolve to their URL, else their path; other values go
/// through [`resolve_output`].
///
/// # Errors
///
/// Returns [`RemoteErrorKind::Payload`] if no media reference can be found.
pub fn resolve_prediction(output: PredictionOutput) -> Result<MediaPayload, RemoteError> {
    match output.clone().as_file() {
        Ok(file) => {
            let reference = file.url.as_deref().unwrap_or(file.path.as_str());
            resolve_output(&Value::from(reference))
        }
        Err(_) => {
            let value = output.as_value().map_err(|e| {
                RemoteError::new(RemoteErrorKind::Payload(format!(
                    "unreadable prediction output: {}",
                    e
                )))
            })?;
            resolve_output(&value)
        }
    }
}

#[async_trait]
impl RemoteClient for GradioClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    #[instrument(skip(self, arguments), fields(endpoint = %endpoint, argument_count = arguments.len()))]
    async fn call(
        &self,
        endpoint: &Endpoint,
        arguments: &[Argument],
    ) -> Result<MediaPayload, RemoteError> {
        let data: Vec<Value> = arguments.iter().map(|arg| arg.value().clone()).collect();

        match endpoint {
            Endpoint::FnIndex(index) => self.call_fn_index(*index, data).await,
            Endpoint::Route(route) => {
                // gradio expects the leading slash of the api_name
                let route = format!("/{}", route.trim_start_matches('/'));
                self.call_route(&route, data).await
            }
        }
    }

    #[instrument(skip(self))]
    async fn describe_api(&self) -> Result<Value, RemoteError> {
        let info = self.app().await?.view_api();
        serde_json::to_value(info).map_err(|e| {
            RemoteError::new(RemoteErrorKind::Payload(format!(
                "Failed to encode API description: {}",
                e
            )))
        })
    }
}
