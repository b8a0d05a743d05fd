//! Test utilities for the fallback invoker.
//!
//! Provides a scripted in-memory remote client that records every call.

#![allow(dead_code)]

use async_trait::async_trait;
use kineto_core::{Argument, Endpoint, GenerationRequest, MediaPayload, ParamSlot};
use kineto_error::{RemoteError, RemoteErrorKind};
use kineto_interface::RemoteClient;
use std::sync::Mutex;
use std::time::Duration;

type Rule = Box<dyn Fn(&Endpoint, &[ParamSlot]) -> Result<MediaPayload, RemoteErrorKind> + Send + Sync>;

/// A recorded remote call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: Endpoint,
    pub slots: Vec<ParamSlot>,
}

/// Remote client whose answers come from a rule over the call signature.
pub struct ScriptedClient {
    rule: Rule,
    delay: Option<(usize, Duration)>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    /// Answers every call with `rule`.
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(&Endpoint, &[ParamSlot]) -> Result<MediaPayload, RemoteErrorKind> + Send + Sync + 'static,
    {
        Self {
            rule: Box::new(rule),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Accepts only calls with at most `max_slots` arguments, like an
    /// endpoint that rejects unexpected positional arguments.
    pub fn accepting_at_most(max_slots: usize) -> Self {
        Self::new(move |_, slots| {
            if slots.len() <= max_slots {
                Ok(payload_for(slots.len()))
            } else {
                Err(RemoteErrorKind::Api {
                    status: 422,
                    message: format!("expected at most {} arguments", max_slots),
                })
            }
        })
    }

    /// Fails every call.
    pub fn always_failing() -> Self {
        Self::new(|endpoint, slots| {
            Err(RemoteErrorKind::Remote(format!(
                "{} rejected {} arguments",
                endpoint,
                slots.len()
            )))
        })
    }

    /// Sleeps for `delay` before answering calls with exactly `slot_count` arguments.
    pub fn with_delay(mut self, slot_count: usize, delay: Duration) -> Self {
        self.delay = Some((slot_count, delay));
        self
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock poisoned").len()
    }
}

#[async_trait]
impl RemoteClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn call(
        &self,
        endpoint: &Endpoint,
        arguments: &[Argument],
    ) -> Result<MediaPayload, RemoteError> {
        let slots: Vec<ParamSlot> = arguments.iter().map(|arg| *arg.slot()).collect();
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(RecordedCall {
                endpoint: endpoint.clone(),
                slots: slots.clone(),
            });

        if let Some((count, delay)) = self.delay {
            if count == slots.len() {
                tokio::time::sleep(delay).await;
            }
        }

        (self.rule)(endpoint, &slots).map_err(RemoteError::new)
    }
}

/// Distinct payload per argument count.
pub fn payload_for(slot_count: usize) -> MediaPayload {
    MediaPayload::Path(format!("/tmp/gradio/video_{}.mp4", slot_count).into())
}

/// Request carrying every optional field.
pub fn full_request() -> GenerationRequest {
    GenerationRequest::builder()
        .prompt("a cat playing piano")
        .negative_prompt("blurry".to_string())
        .seed(42i64)
        .build()
        .expect("valid request")
}
