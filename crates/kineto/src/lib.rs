//! Fallback invocation of remote text-to-video endpoints.
//!
//! Kineto sends a generation request to a remote endpoint (a Gradio app or
//! the HuggingFace Inference API) using an ordered chain of call shapes,
//! returning the result of the first shape the endpoint accepts.
//!
//! # Example
//!
//! ```no_run
//! use kineto::{GenerationRequest, KinetoConfig};
//!
//! # async fn run() -> kineto::KinetoResult<()> {
//! let config = KinetoConfig::from_file("kineto.toml")?;
//! let invoker = config.invoker()?;
//!
//! let request = config.defaults().request_builder("a paper boat on a pond").build().map_err(|e| {
//!     kineto::ConfigError::new(e.to_string())
//! })?;
//! let success = invoker.invoke(&request).await?;
//! println!("{} -> {}", success.shape(), success.payload());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod storage;

pub use client::{DynInvoker, connect};
pub use config::{
    ADDRESS_ENV, HF_TOKEN_ENV, KinetoConfig, RemoteConfig, RemoteKind, RequestDefaults,
    ShapeConfig, TOKEN_ENV,
};
pub use storage::save_payload;

pub use kineto_core::{
    Argument, CallShape, Endpoint, GenerationRequest, GenerationRequestBuilder,
    InvocationSuccess, LogFormat, MediaPayload, ParamSlot, ProbeEntry, ProbeReport, ShapeChain,
    init_tracing,
};
pub use kineto_error::{
    ConfigError, HttpError, InvokeError, InvokeErrorKind, KinetoError, KinetoErrorKind,
    KinetoResult, RemoteError, RemoteErrorKind, ShapeFailure, StorageError, StorageErrorKind,
    ValidationError, ValidationErrorKind,
};
pub use kineto_interface::RemoteClient;
pub use kineto_invoker::{FallbackInvoker, invoke};
pub use kineto_models::{GradioClient, HuggingFaceClient};
