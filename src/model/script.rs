//! Question scripts: ordered executable steps with named parameters.
//!
//! A script is the playback program of one question. Each step has a kind
//! (show content, accept answer, resolve a price, pick an answerer) and a
//! map of named parameters. The player walks steps in order; the engine
//! never interprets parameter payloads beyond the well-known names in
//! [`params`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::content::ContentItem;

/// Well-known parameter names.
pub mod params {
    /// Ordered content items of a step.
    pub const CONTENT: &str = "content";
    /// Answer content of an accept step (marks the answer as embedded).
    pub const ANSWER: &str = "answer";
    /// Price range of a set-price step.
    pub const PRICE: &str = "price";
    /// Answerer selection mode of a set-answerer step.
    pub const ANSWERER: &str = "answerer";
}

/// Kind of a script step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    /// Reveal the step's content items in order.
    ShowContent,
    /// Accept/reveal the answer.
    AcceptAnswer,
    /// Resolve the question price externally (wager/secret-price types).
    SetPrice,
    /// Resolve who answers externally (secret/no-risk types).
    SetAnswerer,
}

/// A range of admissible numbers (wager/price ranges).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSet {
    pub minimum: i64,
    pub maximum: i64,
    /// Increment between admissible values; 0 means any value in range.
    pub step: i64,
}

impl NumberSet {
    /// Create a range with the given bounds and step.
    #[must_use]
    pub const fn new(minimum: i64, maximum: i64, step: i64) -> Self {
        Self {
            minimum,
            maximum,
            step,
        }
    }
}

/// A step parameter value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    /// Plain string value.
    Simple(String),
    /// Ordered content items.
    Content(Vec<ContentItem>),
    /// Numeric range.
    NumberSet(NumberSet),
    /// Nested parameter group.
    Group(FxHashMap<String, Parameter>),
}

impl Parameter {
    /// Content items, if this parameter holds any.
    #[must_use]
    pub fn as_content(&self) -> Option<&[ContentItem]> {
        match self {
            Parameter::Content(items) => Some(items),
            _ => None,
        }
    }

    /// Number set, if this parameter holds one.
    #[must_use]
    pub fn as_number_set(&self) -> Option<&NumberSet> {
        match self {
            Parameter::NumberSet(set) => Some(set),
            _ => None,
        }
    }
}

/// One executable unit of a question script.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    #[serde(default)]
    pub parameters: FxHashMap<String, Parameter>,
}

impl Step {
    /// Create a step with no parameters.
    #[must_use]
    pub fn new(kind: StepKind) -> Self {
        Self {
            kind,
            parameters: FxHashMap::default(),
        }
    }

    /// Add a parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: Parameter) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Convenience: a show-content step with the given items.
    #[must_use]
    pub fn show_content(items: Vec<ContentItem>) -> Self {
        Self::new(StepKind::ShowContent).with_param(params::CONTENT, Parameter::Content(items))
    }

    /// Convenience: a bare accept-answer step.
    #[must_use]
    pub fn accept_answer() -> Self {
        Self::new(StepKind::AcceptAnswer)
    }

    /// Content items of this step, if any.
    #[must_use]
    pub fn content(&self) -> Option<&[ContentItem]> {
        self.parameters
            .get(params::CONTENT)
            .and_then(Parameter::as_content)
    }
}

/// A question's ordered step list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard two-step script: show the given content, then accept.
    #[must_use]
    pub fn standard(items: Vec<ContentItem>) -> Self {
        Self {
            steps: vec![Step::show_content(items), Step::accept_answer()],
        }
    }

    /// Append a step.
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }
}
