//! Call shapes and the fallback chain they form.

use crate::{GenerationRequest, ParamSlot};
use derive_getters::Getters;
use kineto_error::{ConfigError, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Target of a remote call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Positional function index of a Gradio app
    FnIndex(u32),
    /// Named route: a Gradio `api_name` or a hosted model id
    Route(String),
}

impl Endpoint {
    /// Route name without its leading slash, if this is a named route.
    pub fn route_name(&self) -> Option<&str> {
        match self {
            Endpoint::FnIndex(_) => None,
            Endpoint::Route(route) => Some(route.trim_start_matches('/')),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::FnIndex(index) => write!(f, "fn_index={}", index),
            Endpoint::Route(route) => write!(f, "{}", route),
        }
    }
}

/// One entry of an ordered argument list.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Argument {
    /// Slot the value fills
    slot: ParamSlot,
    /// Wire value
    value: Value,
}

impl Argument {
    /// Creates an argument for `slot`.
    pub fn new(slot: ParamSlot, value: impl Into<Value>) -> Self {
        Self {
            slot,
            value: value.into(),
        }
    }

    /// Consumes the argument, returning its value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// An ordered set of parameter slots sent to one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct CallShape {
    /// Identifier used in diagnostics
    name: String,
    /// Target endpoint
    endpoint: Endpoint,
    /// Declared slots, in wire order
    slots: Vec<ParamSlot>,
}

impl CallShape {
    /// Creates a call shape.
    pub fn new(name: impl Into<String>, endpoint: Endpoint, slots: Vec<ParamSlot>) -> Self {
        Self {
            name: name.into(),
            endpoint,
            slots,
        }
    }

    /// Every parameter, seed last.
    pub fn full_params(endpoint: Endpoint) -> Self {
        Self::new("full_params", endpoint, ParamSlot::ALL.to_vec())
    }

    /// Every parameter except the seed.
    pub fn without_seed(endpoint: Endpoint) -> Self {
        let slots = ParamSlot::ALL
            .into_iter()
            .filter(|slot| *slot != ParamSlot::Seed)
            .collect();
        Self::new("without_seed", endpoint, slots)
    }

    /// Prompt followed by negative prompt.
    pub fn prompt_and_negative(endpoint: Endpoint) -> Self {
        Self::new(
            "prompt_and_negative",
            endpoint,
            vec![ParamSlot::Prompt, ParamSlot::NegativePrompt],
        )
    }

    /// Prompt alone.
    pub fn prompt_only(endpoint: Endpoint) -> Self {
        Self::new("prompt_only", endpoint, vec![ParamSlot::Prompt])
    }

    /// Builds the argument list for `request`, keeping only declared slots.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::MissingSlot`] if the shape declares a
    /// slot the request has no value for.
    #[track_caller]
    pub fn arguments(&self, request: &GenerationRequest) -> Result<Vec<Argument>, ValidationError> {
        self.slots
            .iter()
            .map(|slot| {
                request
                    .slot_value(*slot)
                    .map(|value| Argument::new(*slot, value))
                    .ok_or_else(|| {
                        ValidationError::new(ValidationErrorKind::MissingSlot(slot.to_string()))
                    })
            })
            .collect()
    }
}

/// Priority-ordered, non-empty list of call shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ShapeChain(Vec<CallShape>);

impl ShapeChain {
    /// Creates a chain from shapes ordered most-specific first.
    ///
    /// # Errors
    ///
    /// Returns an error if `shapes` is empty or a shape declares no slots.
    #[track_caller]
    pub fn new(shapes: Vec<CallShape>) -> Result<Self, ConfigError> {
        if shapes.is_empty() {
            return Err(ConfigError::new("Shape chain cannot be empty"));
        }
        if let Some(shape) = shapes.iter().find(|shape| shape.slots.is_empty()) {
            return Err(ConfigError::new(format!(
                "Call shape '{}' declares no slots",
                shape.name
            )));
        }
        Ok(Self(shapes))
    }

    /// Default chain against `endpoint`: full parameters, without seed,
    /// prompt plus negative prompt, prompt only.
    pub fn standard(endpoint: Endpoint) -> Self {
        Self(vec![
            CallShape::full_params(endpoint.clone()),
            CallShape::without_seed(endpoint.clone()),
            CallShape::prompt_and_negative(endpoint.clone()),
            CallShape::prompt_only(endpoint),
        ])
    }

    /// Standard chain against `primary`, then the prompt alone against
    /// `secondary` (apps often expose a simpler function beside the main one).
    pub fn standard_with_secondary(primary: Endpoint, secondary: Endpoint) -> Self {
        let Self(mut shapes) = Self::standard(primary);
        shapes.push(CallShape::new(
            "secondary_prompt_only",
            secondary,
            vec![ParamSlot::Prompt],
        ));
        Self(shapes)
    }

    /// Number of shapes in the chain.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the chain holds no shapes; never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates shapes in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, CallShape> {
        self.0.iter()
    }

    /// Shapes in priority order.
    pub fn shapes(&self) -> &[CallShape] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ShapeChain {
    type Item = &'a CallShape;
    type IntoIter = std::slice::Iter<'a, CallShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
