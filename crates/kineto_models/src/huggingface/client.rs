//! Client for the HuggingFace hosted Inference API.

use crate::http::{authorize, build_client, check_status, join_url, transport_error};
use crate::huggingface::{HuggingFaceAnswer, HuggingFaceRequest};
use crate::payload::resolve_output;
use async_trait::async_trait;
use kineto_core::{Argument, Endpoint, MediaPayload};
use kineto_error::{HttpError, RemoteError, RemoteErrorKind};
use kineto_interface::RemoteClient;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, error, instrument};

const PROVIDER: &str = "huggingface";

/// Default Inference API address.
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";

/// Remote client for text-to-video models on the HuggingFace Inference API.
///
/// Only named routes are supported; the route is the model id
/// (e.g. `Lightricks/LTX-Video`). Arguments are sent as named parameters.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HuggingFaceClient {
    /// Creates a client against the public Inference API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: Option<String>) -> Result<Self, HttpError> {
        Self::new_with_url(DEFAULT_INFERENCE_URL, token)
    }

    /// Creates a client against a custom Inference API address.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(skip_all)]
    pub fn new_with_url(base_url: impl AsRef<str>, token: Option<String>) -> Result<Self, HttpError> {
        let client = build_client()?;
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();

        debug!(
            provider = PROVIDER,
            url = %base_url,
            authenticated = token.is_some(),
            "Created HuggingFace client"
        );

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Returns the API address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Turns an Inference API answer into a media payload.
///
/// JSON answers carry either an error or a link to the result; any other
/// content type is the media itself.
///
/// # Errors
///
/// - [`RemoteErrorKind::Remote`] if the answer reports an error.
/// - [`RemoteErrorKind::Payload`] for empty bodies or unusable JSON.
pub fn interpret_inference_answer(
    content_type: Option<&str>,
    body: Vec<u8>,
) -> Result<MediaPayload, RemoteError> {
    let is_json = content_type.is_some_and(|mime| mime.starts_with("application/json"));

    if is_json {
        let answer: HuggingFaceAnswer = serde_json::from_slice(&body).map_err(|e| {
            RemoteError::new(RemoteErrorKind::Payload(format!(
                "Failed to parse JSON answer: {}",
                e
            )))
        })?;
        if let Some(message) = answer.error() {
            return Err(RemoteError::new(RemoteErrorKind::Remote(message.to_string())));
        }
        return resolve_output(&Value::Object(answer.rest().clone()));
    }

    if body.is_empty() {
        return Err(RemoteError::new(RemoteErrorKind::Payload(
            "answer body is empty".to_string(),
        )));
    }

    Ok(MediaPayload::Bytes {
        mime: content_type.map(str::to_string),
        data: body,
    })
}

#[async_trait]
impl RemoteClient for HuggingFaceClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    #[instrument(skip(self, arguments), fields(endpoint = %endpoint, argument_count = arguments.len()))]
    async fn call(
        &self,
        endpoint: &Endpoint,
        arguments: &[Argument],
    ) -> Result<MediaPayload, RemoteError> {
        let Some(model) = endpoint.route_name() else {
            return Err(RemoteError::new(RemoteErrorKind::Unsupported(format!(
                "hosted inference has no positional endpoint ({})",
                endpoint
            ))));
        };

        let body = HuggingFaceRequest::from_arguments(arguments)?;
        debug!(
            provider = PROVIDER,
            model,
            parameter_count = body.parameters().len(),
            "Sending request"
        );

        let url = join_url(&self.base_url, &format!("models/{}", model));
        let response = authorize(self.client.post(&url), self.token.as_deref())
            .header("x-wait-for-model", "true")
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        let response = check_status(PROVIDER, response).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        debug!(
            provider = PROVIDER,
            content_type = ?content_type,
            size = bytes.len(),
            "Received answer"
        );

        interpret_inference_answer(content_type.as_deref(), bytes.to_vec()).inspect_err(|e| {
            error!(provider = PROVIDER, error = %e.kind, "Unusable answer");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_answer_is_bytes() {
        let payload = interpret_inference_answer(Some("video/mp4"), vec![0, 0, 0, 24]).unwrap();
        assert_eq!(
            payload,
            MediaPayload::Bytes {
                mime: Some("video/mp4".into()),
                data: vec![0, 0, 0, 24],
            }
        );
    }

    #[test]
    fn json_error_is_remote_error() {
        let body = br#"{"error":"Model Lightricks/LTX-Video is currently loading"}"#.to_vec();
        let err = interpret_inference_answer(Some("application/json"), body).unwrap_err();
        assert!(matches!(err.kind, RemoteErrorKind::Remote(ref m) if m.contains("loading")));
    }

    #[test]
    fn json_link_is_resolved() {
        let body = br#"{"url":"https://cdn.example.org/out.mp4"}"#.to_vec();
        let payload =
            interpret_inference_answer(Some("application/json; charset=utf-8"), body).unwrap();
        assert_eq!(payload, MediaPayload::Url("https://cdn.example.org/out.mp4".into()));
    }

    #[test]
    fn empty_body_is_payload_error() {
        let err = interpret_inference_answer(None, Vec::new()).unwrap_err();
        assert!(matches!(err.kind, RemoteErrorKind::Payload(_)));
    }

    #[tokio::test]
    async fn fn_index_is_unsupported_without_a_request() {
        let client = HuggingFaceClient::new_with_url("http://127.0.0.1:9", None).unwrap();
        let err = client
            .call(
                &Endpoint::FnIndex(0),
                &[Argument::new(kineto_core::ParamSlot::Prompt, "a cat")],
            )
            .await
            .unwrap_err();
        assert!(matches!(err.kind, RemoteErrorKind::Unsupported(_)));
    }
}
