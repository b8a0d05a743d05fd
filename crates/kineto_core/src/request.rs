//! Generation request submitted by the user.

use crate::ParamSlot;
use derive_builder::Builder;
use derive_getters::Getters;
use kineto_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default frame count (about five seconds at 24fps plus the anchor frame).
pub const DEFAULT_FRAME_COUNT: u32 = 121;
/// Default output width.
pub const DEFAULT_WIDTH: u32 = 768;
/// Default output height.
pub const DEFAULT_HEIGHT: u32 = 512;
/// Default guidance scale.
pub const DEFAULT_GUIDANCE_SCALE: f64 = 3.0;
/// Default number of inference steps.
pub const DEFAULT_INFERENCE_STEPS: u32 = 30;

/// A single text-to-video submission.
///
/// Constructed per submission, consumed by one invocation and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Text prompt
    prompt: String,
    /// Optional negative prompt
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<String>,
    /// Number of frames
    #[builder(default = "DEFAULT_FRAME_COUNT")]
    frame_count: u32,
    /// Width in pixels
    #[builder(default = "DEFAULT_WIDTH")]
    width: u32,
    /// Height in pixels
    #[builder(default = "DEFAULT_HEIGHT")]
    height: u32,
    /// Guidance scale
    #[builder(default = "DEFAULT_GUIDANCE_SCALE")]
    guidance_scale: f64,
    /// Denoising steps
    #[builder(default = "DEFAULT_INFERENCE_STEPS")]
    inference_steps: u32,
    /// Optional seed
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
}

impl GenerationRequest {
    /// Creates a new builder for `GenerationRequest`.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Checks the request invariants.
    ///
    /// The prompt must contain non-whitespace text and every numeric
    /// parameter must be strictly positive.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyPrompt));
        }

        let counts = [
            ("frame_count", self.frame_count),
            ("width", self.width),
            ("height", self.height),
            ("inference_steps", self.inference_steps),
        ];
        if let Some((field, value)) = counts.into_iter().find(|(_, value)| *value == 0) {
            return Err(ValidationError::new(ValidationErrorKind::NonPositive {
                field,
                value: value.to_string(),
            }));
        }

        if !(self.guidance_scale.is_finite() && self.guidance_scale > 0.0) {
            return Err(ValidationError::new(ValidationErrorKind::NonPositive {
                field: "guidance_scale",
                value: self.guidance_scale.to_string(),
            }));
        }

        Ok(())
    }

    /// Returns the wire value for `slot`, or `None` if the request has none.
    ///
    /// A missing negative prompt is sent as an empty string; a missing seed
    /// has no value.
    pub fn slot_value(&self, slot: ParamSlot) -> Option<Value> {
        match slot {
            ParamSlot::Prompt => Some(Value::from(self.prompt.as_str())),
            ParamSlot::NegativePrompt => Some(Value::from(
                self.negative_prompt.as_deref().unwrap_or_default(),
            )),
            ParamSlot::FrameCount => Some(Value::from(self.frame_count)),
            ParamSlot::Width => Some(Value::from(self.width)),
            ParamSlot::Height => Some(Value::from(self.height)),
            ParamSlot::GuidanceScale => Some(Value::from(self.guidance_scale)),
            ParamSlot::InferenceSteps => Some(Value::from(self.inference_steps)),
            ParamSlot::Seed => self.seed.map(Value::from),
        }
    }
}
