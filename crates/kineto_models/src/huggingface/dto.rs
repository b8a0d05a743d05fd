//! HuggingFace Inference API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use kineto_core::{Argument, ParamSlot};
use kineto_error::{RemoteError, RemoteErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a hosted-inference call.
#[derive(Debug, Clone, Serialize, Getters, Builder)]
#[builder(setter(into))]
pub struct HuggingFaceRequest {
    /// Input text
    inputs: String,
    /// Named generation parameters
    #[builder(default)]
    #[serde(skip_serializing_if = "Map::is_empty")]
    parameters: Map<String, Value>,
}

impl HuggingFaceRequest {
    /// Creates a new builder for `HuggingFaceRequest`.
    pub fn builder() -> HuggingFaceRequestBuilder {
        HuggingFaceRequestBuilder::default()
    }

    /// Builds the named-parameter body for an ordered argument list.
    ///
    /// The prompt becomes `inputs`; every other argument is keyed by its
    /// slot's wire name. Empty negative prompts are left out.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteErrorKind::Unsupported`] if no argument fills the
    /// prompt slot.
    pub fn from_arguments(arguments: &[Argument]) -> Result<Self, RemoteError> {
        let mut inputs = None;
        let mut parameters = Map::new();

        for argument in arguments {
            match argument.slot() {
                ParamSlot::Prompt => inputs = argument.value().as_str().map(str::to_string),
                ParamSlot::NegativePrompt if argument.value().as_str() == Some("") => {}
                slot => {
                    parameters.insert(slot.to_string(), argument.value().clone());
                }
            }
        }

        let inputs = inputs.ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::Unsupported(
                "hosted inference needs a prompt argument".to_string(),
            ))
        })?;

        Ok(Self { inputs, parameters })
    }
}

/// Error reported by the Inference API: one message, or one per input
/// validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HuggingFaceErrorMessage {
    /// Single message
    One(String),
    /// Several messages
    Many(Vec<String>),
}

impl std::fmt::Display for HuggingFaceErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HuggingFaceErrorMessage::One(message) => write!(f, "{}", message),
            HuggingFaceErrorMessage::Many(messages) => write!(f, "{}", messages.join("; ")),
        }
    }
}

/// JSON answer of the Inference API.
///
/// Video models answer with raw bytes; JSON only appears for errors or for
/// deployments that hand back a link.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct HuggingFaceAnswer {
    /// Error message (model loading, bad parameters)
    #[serde(default)]
    error: Option<HuggingFaceErrorMessage>,
    /// Everything else in the answer
    #[serde(flatten)]
    rest: Map<String, Value>,
}
