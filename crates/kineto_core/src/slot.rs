//! Parameter slots a call shape can declare.

use serde::{Deserialize, Serialize};

/// A generation parameter that can occupy a position in a call shape.
///
/// The string form is the wire name used by named-parameter endpoints.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ParamSlot {
    /// Text prompt
    Prompt,
    /// Negative prompt
    NegativePrompt,
    /// Number of frames to generate
    #[serde(rename = "num_frames")]
    #[strum(serialize = "num_frames")]
    FrameCount,
    /// Output width in pixels
    Width,
    /// Output height in pixels
    Height,
    /// Classifier-free guidance scale
    GuidanceScale,
    /// Number of denoising steps
    #[serde(rename = "num_inference_steps")]
    #[strum(serialize = "num_inference_steps")]
    InferenceSteps,
    /// Sampling seed
    Seed,
}

impl ParamSlot {
    /// Every slot in the canonical positional order.
    pub const ALL: [ParamSlot; 8] = [
        ParamSlot::Prompt,
        ParamSlot::NegativePrompt,
        ParamSlot::FrameCount,
        ParamSlot::Width,
        ParamSlot::Height,
        ParamSlot::GuidanceScale,
        ParamSlot::InferenceSteps,
        ParamSlot::Seed,
    ];
}
