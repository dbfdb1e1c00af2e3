//! Outgoing request payloads.

use serde_json::{Value, json};

use crate::error::Result;
use crate::proposal::{Priority, ProposalStep};

/// Default `proposed_by` for proposals created through the SDK.
pub const DEFAULT_PROPOSED_BY: &str = "sdk";

/// One step handed to [`NewProposal`]: a built [`ProposalStep`] or a raw
/// JSON object with `title`, `assigned_to` (or `assignedTo`), and `prompt`.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    /// A step built in code.
    Step(ProposalStep),
    /// A raw JSON object, normalized on send.
    Raw(Value),
}

impl StepInput {
    /// Normalize to the narrow wire shape.
    ///
    /// Raw input goes through [`ProposalStep::from_json`], so a non-object
    /// value fails here, before anything is sent.
    pub fn to_wire(&self) -> Result<Value> {
        match self {
            Self::Step(step) => Ok(step.to_wire()),
            Self::Raw(value) => Ok(ProposalStep::from_json(value)?.to_wire()),
        }
    }
}

impl From<ProposalStep> for StepInput {
    fn from(step: ProposalStep) -> Self {
        Self::Step(step)
    }
}

impl From<Value> for StepInput {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

/// Payload for creating a proposal.
///
/// Title and description are sent as given; the server decides whether
/// empty values are acceptable.
///
/// # Example
///
/// ```
/// use xskynet_types::{NewProposal, Priority, ProposalStep};
///
/// let proposal = NewProposal::new("Research Competitors", "Competitive analysis for Q2")
///     .proposed_by("nova")
///     .priority(Priority::High)
///     .step(ProposalStep::new("Gather data", "scout", "Search for ..."))
///     .step(serde_json::json!({"title": "Write report", "assigned_to": "quill", "prompt": "Summarise ..."}));
///
/// let body = proposal.to_wire().unwrap();
/// assert_eq!(body["steps"].as_array().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NewProposal {
    /// Short title.
    pub title: String,
    /// What needs to be done.
    pub description: String,
    /// Creator identifier (agent id or username).
    pub proposed_by: String,
    /// Advisory priority; free text on the wire.
    pub priority: String,
    /// Steps in execution order.
    pub steps: Vec<StepInput>,
}

impl NewProposal {
    /// Start a proposal with the default creator (`"sdk"`), `"medium"`
    /// priority, and no steps.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            proposed_by: DEFAULT_PROPOSED_BY.into(),
            priority: Priority::Medium.into(),
            steps: Vec::new(),
        }
    }

    /// Set the creator.
    #[must_use]
    pub fn proposed_by(mut self, who: impl Into<String>) -> Self {
        self.proposed_by = who.into();
        self
    }

    /// Set the priority. Accepts a [`Priority`] or any string.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Append one step.
    #[must_use]
    pub fn step(mut self, step: impl Into<StepInput>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Append several steps, keeping their order.
    #[must_use]
    pub fn steps<I>(mut self, steps: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StepInput>,
    {
        self.steps.extend(steps.into_iter().map(Into::into));
        self
    }

    /// The request body. `steps` is always present, `[]` when empty.
    pub fn to_wire(&self) -> Result<Value> {
        let steps = self
            .steps
            .iter()
            .map(StepInput::to_wire)
            .collect::<Result<Vec<_>>>()?;

        Ok(json!({
            "title": self.title,
            "description": self.description,
            "proposed_by": self.proposed_by,
            "priority": self.priority,
            "steps": steps,
        }))
    }
}
