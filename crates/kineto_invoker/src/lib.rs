//! Resilient invocation of a remote generation endpoint.
//!
//! A request is driven through a [`ShapeChain`](kineto_core::ShapeChain): each
//! call shape is tried once, in priority order, until one succeeds. Individual
//! failures are recorded and only surface if every shape fails.

mod attempt;
mod invoker;

pub use invoker::{FallbackInvoker, invoke};
