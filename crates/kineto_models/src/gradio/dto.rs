//! Gradio legacy predict data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a `run/predict` call against a positional function.
#[derive(Debug, Clone, Serialize, Getters, Builder)]
#[builder(setter(into))]
pub struct GradioPredictRequest {
    /// Positional input values
    data: Vec<Value>,
    /// Index of the function in the app's dependency list
    fn_index: u32,
}

impl GradioPredictRequest {
    /// Creates a new builder for `GradioPredictRequest`.
    pub fn builder() -> GradioPredictRequestBuilder {
        GradioPredictRequestBuilder::default()
    }
}

/// Answer of a `run/predict` call.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct GradioPredictResponse {
    /// Output values
    #[serde(default)]
    data: Option<Value>,
    /// Error message raised by the app
    #[serde(default)]
    error: Option<String>,
}
