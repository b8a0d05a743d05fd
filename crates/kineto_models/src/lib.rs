//! Remote text-to-video endpoint clients for Kineto.
//!
//! Each client implements [`kineto_interface::RemoteClient`] for one kind of
//! host:
//!
//! - `gradio`: apps served by Gradio, including `*.gradio.live` share links
//! - `huggingface`: models on the HuggingFace hosted Inference API
//!
//! Both are enabled by default.

#[cfg(any(feature = "gradio", feature = "huggingface"))]
mod http;
mod payload;

#[cfg(feature = "gradio")]
pub mod gradio;
#[cfg(feature = "huggingface")]
pub mod huggingface;

pub use payload::resolve_output;

#[cfg(feature = "gradio")]
pub use gradio::{GradioClient, resolve_prediction};
#[cfg(feature = "huggingface")]
pub use huggingface::{HuggingFaceClient, interpret_inference_answer};
