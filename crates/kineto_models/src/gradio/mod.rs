//! Gradio app client.

mod client;
mod dto;

pub use client::{DEFAULT_API_PREFIX, GradioClient, resolve_prediction};
pub use dto::{GradioPredictRequest, GradioPredictRequestBuilder, GradioPredictResponse};
