//! Core data types for the Kineto library.
//!
//! This crate provides the request, call-shape and media types shared by the
//! fallback invoker and the remote clients.

mod media;
mod observability;
mod outcome;
mod request;
mod shape;
mod slot;

pub use media::MediaPayload;
pub use observability::{LogFormat, init_tracing};
pub use outcome::{InvocationSuccess, ProbeEntry, ProbeReport};
pub use request::{
    DEFAULT_FRAME_COUNT, DEFAULT_GUIDANCE_SCALE, DEFAULT_HEIGHT, DEFAULT_INFERENCE_STEPS,
    DEFAULT_WIDTH, GenerationRequest, GenerationRequestBuilder,
};
pub use shape::{Argument, CallShape, Endpoint, ShapeChain};
pub use slot::ParamSlot;
