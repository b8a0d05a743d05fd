//! HuggingFace Inference API integration.

mod client;
mod dto;

pub use client::{DEFAULT_INFERENCE_URL, HuggingFaceClient, interpret_inference_answer};
pub use dto::{
    HuggingFaceAnswer, HuggingFaceErrorMessage, HuggingFaceRequest, HuggingFaceRequestBuilder,
};
