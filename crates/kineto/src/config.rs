//! Configuration loading for the Kineto client.
//!
//! Configuration lives in a TOML file (default `kineto.toml`):
//!
//! ```toml
//! [remote]
//! kind = "gradio"
//! address = "https://5a84.gradio.live"
//! attempt_timeout_secs = 600
//!
//! [defaults]
//! frame_count = 121
//!
//! [[shapes]]
//! name = "prompt_only"
//! fn_index = 0
//! slots = ["prompt"]
//! ```
//!
//! The address may be overridden with `KINETO_ADDRESS`. The credential is read
//! from `KINETO_API_TOKEN`, falling back to `HF_TOKEN`, and is never stored in
//! the file.

use derive_getters::Getters;
use kineto_core::{
    CallShape, DEFAULT_FRAME_COUNT, DEFAULT_GUIDANCE_SCALE, DEFAULT_HEIGHT,
    DEFAULT_INFERENCE_STEPS, DEFAULT_WIDTH, Endpoint, GenerationRequest,
    GenerationRequestBuilder, ParamSlot, ShapeChain,
};
use kineto_error::{ConfigError, KinetoResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable overriding `remote.address`.
pub const ADDRESS_ENV: &str = "KINETO_ADDRESS";
/// Environment variable holding the API credential.
pub const TOKEN_ENV: &str = "KINETO_API_TOKEN";
/// Fallback credential variable used by HuggingFace tooling.
pub const HF_TOKEN_ENV: &str = "HF_TOKEN";

/// Kind of remote host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteKind {
    /// A Gradio app
    #[default]
    Gradio,
    /// The HuggingFace Inference API
    HuggingFace,
}

/// Where and how to reach the remote endpoint.
#[derive(Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct RemoteConfig {
    /// Host kind
    #[serde(default)]
    kind: RemoteKind,
    /// Base address; required for Gradio
    #[serde(default)]
    address: Option<String>,
    /// Model id used as the route of the standard chain
    #[serde(default)]
    model: Option<String>,
    /// Gradio REST prefix override (`""` for Gradio 4 apps)
    #[serde(default)]
    api_prefix: Option<String>,
    /// Per-attempt deadline in seconds
    #[serde(default)]
    attempt_timeout_secs: Option<u64>,
    /// Credential, from the environment only
    #[serde(skip)]
    token: Option<String>,
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("kind", &self.kind)
            .field("address", &self.address)
            .field("model", &self.model)
            .field("api_prefix", &self.api_prefix)
            .field("attempt_timeout_secs", &self.attempt_timeout_secs)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Request values used when the command line leaves them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct RequestDefaults {
    /// Negative prompt
    negative_prompt: Option<String>,
    /// Number of frames
    frame_count: u32,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Guidance scale
    guidance_scale: f64,
    /// Denoising steps
    inference_steps: u32,
    /// Seed
    seed: Option<i64>,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            negative_prompt: None,
            frame_count: DEFAULT_FRAME_COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            guidance_scale: DEFAULT_GUIDANCE_SCALE,
            inference_steps: DEFAULT_INFERENCE_STEPS,
            seed: None,
        }
    }
}

impl RequestDefaults {
    /// Starts a request for `prompt` pre-filled with these defaults.
    pub fn request_builder(&self, prompt: impl Into<String>) -> GenerationRequestBuilder {
        let mut builder = GenerationRequest::builder();
        builder
            .prompt(prompt)
            .negative_prompt(self.negative_prompt.clone())
            .frame_count(self.frame_count)
            .width(self.width)
            .height(self.height)
            .guidance_scale(self.guidance_scale)
            .inference_steps(self.inference_steps)
            .seed(self.seed);
        builder
    }
}

/// One `[[shapes]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ShapeConfig {
    /// Shape name
    name: String,
    /// Positional function index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fn_index: Option<u32>,
    /// Named route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    route: Option<String>,
    /// Slots in wire order
    slots: Vec<ParamSlot>,
}

impl ShapeConfig {
    /// Converts the entry into a call shape.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one of `fn_index`/`route` is set and
    /// the slots include `prompt`.
    pub fn to_shape(&self) -> Result<CallShape, ConfigError> {
        let endpoint = match (self.fn_index, &self.route) {
            (Some(index), None) => Endpoint::FnIndex(index),
            (None, Some(route)) if !route.trim().is_empty() => Endpoint::Route(route.clone()),
            (None, Some(_)) => {
                return Err(ConfigError::new(format!(
                    "Shape '{}' has an empty route",
                    self.name
                )));
            }
            _ => {
                return Err(ConfigError::new(format!(
                    "Shape '{}' must set exactly one of fn_index or route",
                    self.name
                )));
            }
        };

        if !self.slots.contains(&ParamSlot::Prompt) {
            return Err(ConfigError::new(format!(
                "Shape '{}' does not send the prompt",
                self.name
            )));
        }

        Ok(CallShape::new(self.name.clone(), endpoint, self.slots.clone()))
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct KinetoConfig {
    /// Remote endpoint
    remote: RemoteConfig,
    /// Request defaults
    #[serde(default)]
    defaults: RequestDefaults,
    /// Explicit shape chain, most specific first
    #[serde(default)]
    shapes: Vec<ShapeConfig>,
}

impl KinetoConfig {
    /// Loads configuration from a TOML file and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> KinetoResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?.with_env_overrides();
        info!(
            kind = ?config.remote.kind,
            address = ?config.remote.address,
            shapes = config.shapes.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Parses configuration text without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.remote.attempt_timeout_secs == Some(0) {
            return Err(ConfigError::new("remote.attempt_timeout_secs must be positive"));
        }
        Ok(config)
    }

    /// Applies `KINETO_ADDRESS` and the credential variables.
    pub fn with_env_overrides(self) -> Self {
        let address = std::env::var(ADDRESS_ENV).ok();
        let token = std::env::var(TOKEN_ENV)
            .or_else(|_| std::env::var(HF_TOKEN_ENV))
            .ok();
        self.with_overrides(address, token)
    }

    /// Replaces the address and credential with the given values, when set.
    pub fn with_overrides(mut self, address: Option<String>, token: Option<String>) -> Self {
        if let Some(address) = address.filter(|a| !a.trim().is_empty()) {
            debug!(address = %address, "Address overridden from environment");
            self.remote.address = Some(address);
        }
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.remote.token = Some(token);
        }
        self
    }

    /// Per-attempt deadline, if configured.
    pub fn attempt_timeout(&self) -> Option<Duration> {
        self.remote.attempt_timeout_secs.map(Duration::from_secs)
    }

    /// Builds the shape chain: the configured shapes, or the standard chain.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured shape is invalid, or if a
    /// HuggingFace remote has neither shapes nor a model.
    pub fn shape_chain(&self) -> Result<ShapeChain, ConfigError> {
        if !self.shapes.is_empty() {
            let shapes = self
                .shapes
                .iter()
                .map(ShapeConfig::to_shape)
                .collect::<Result<Vec<_>, _>>()?;
            return ShapeChain::new(shapes);
        }

        match self.remote.kind {
            RemoteKind::Gradio => Ok(ShapeChain::standard_with_secondary(
                Endpoint::FnIndex(0),
                Endpoint::FnIndex(1),
            )),
            RemoteKind::HuggingFace => match &self.remote.model {
                Some(model) => Ok(ShapeChain::standard(Endpoint::Route(model.clone()))),
                None => Err(ConfigError::new(
                    "hugging_face remotes need [[shapes]] or remote.model",
                )),
            },
        }
    }
}
