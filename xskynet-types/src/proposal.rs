//! Proposals: orchestrated multi-step tasks.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::fields::{self, Field, Keys, deserialize_via_from_json};
use crate::id::{AgentId, ProposalId};

const TITLE: Keys = &["title"];
const ASSIGNED_TO: Keys = &["assigned_to", "assignedTo"];
const PROMPT: Keys = &["prompt"];
const STATUS: Keys = &["status"];
const RESULT: Keys = &["result"];

const STEP_KNOWN: &[Field] = &[
    Field::text(TITLE),
    Field::text(ASSIGNED_TO),
    Field::text(PROMPT),
    Field::text(STATUS),
    Field::any(RESULT),
];

const ID: Keys = &["id"];
const DESCRIPTION: Keys = &["description"];
const PROPOSED_BY: Keys = &["proposed_by", "proposedBy"];
const PRIORITY: Keys = &["priority"];
const STEPS: Keys = &["steps"];
const CREATED_AT: Keys = &["created_at", "createdAt"];
const UPDATED_AT: Keys = &["updated_at", "updatedAt"];

const PROPOSAL_KNOWN: &[Field] = &[
    Field::scalar(ID),
    Field::text(TITLE),
    Field::text(DESCRIPTION),
    Field::text(PROPOSED_BY),
    Field::text(PRIORITY),
    Field::text(STATUS),
    Field::any(STEPS),
    Field::text(CREATED_AT),
    Field::text(UPDATED_AT),
];

/// Default status of a freshly created step or proposal.
pub const DEFAULT_STATUS: &str = "pending";

/// A single step within a [`Proposal`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalStep {
    /// Short step label.
    pub title: String,
    /// Agent responsible for this step.
    pub assigned_to: AgentId,
    /// Instruction passed to the agent.
    pub prompt: String,
    /// Step lifecycle status. Reported by the server, never sent.
    pub status: String,
    /// Output produced by the agent once complete. Reported by the server, never sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Fields this SDK does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProposalStep {
    /// Build a step for submission with a `"pending"` status and no result.
    pub fn new(
        title: impl Into<String>,
        assigned_to: impl Into<AgentId>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            assigned_to: assigned_to.into(),
            prompt: prompt.into(),
            status: DEFAULT_STATUS.into(),
            result: None,
            extra: Map::new(),
        }
    }

    /// Decode a step from a raw API object.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = fields::object(value, "proposal step")?;
        // Results are usually text; anything else is kept as its JSON rendering.
        let result = fields::lookup(obj, RESULT).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });

        Ok(Self {
            title: fields::string_or(obj, TITLE, ""),
            assigned_to: AgentId(fields::string_or(obj, ASSIGNED_TO, "")),
            prompt: fields::string_or(obj, PROMPT, ""),
            status: fields::string_or(obj, STATUS, DEFAULT_STATUS),
            result,
            extra: fields::extra(obj, STEP_KNOWN),
        })
    }

    /// The request shape: `title`, `assigned_to`, and `prompt` only.
    ///
    /// Clients create work; only the server reports step outcomes, so
    /// `status`, `result`, and extras are never sent back.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        json!({
            "title": self.title,
            "assigned_to": self.assigned_to,
            "prompt": self.prompt,
        })
    }
}

deserialize_via_from_json!(ProposalStep);

/// Advisory proposal priority.
///
/// Records keep priority as a free string because the server does not
/// restrict it; this enum covers the documented values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Background work.
    Low,
    /// The default.
    #[default]
    Medium,
    /// Ahead of medium work.
    High,
    /// Drop everything.
    Critical,
}

impl Priority {
    /// Wire spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that is not one of the documented [`Priority`] values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority '{0}' (expected low, medium, high, or critical)")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> std::result::Result<Self, UnknownPriority> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(UnknownPriority(other.to_owned())),
        }
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        p.as_str().to_owned()
    }
}

/// An orchestrated multi-step task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proposal {
    /// Server-assigned identifier.
    pub id: ProposalId,
    /// Short title describing the task.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Agent or user who created the proposal.
    pub proposed_by: String,
    /// `"low"`, `"medium"`, `"high"`, or `"critical"` by convention. Not validated.
    pub priority: String,
    /// Lifecycle status.
    pub status: String,
    /// Steps in execution order.
    pub steps: Vec<ProposalStep>,
    /// ISO-8601 creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// ISO-8601 last-update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Fields this SDK does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Proposal {
    /// Decode a proposal, including its steps, from a raw API object.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = fields::object(value, "proposal")?;

        Ok(Self {
            id: ProposalId(fields::scalar(obj, ID).unwrap_or_default()),
            title: fields::string_or(obj, TITLE, ""),
            description: fields::string_or(obj, DESCRIPTION, ""),
            proposed_by: fields::string_or(obj, PROPOSED_BY, ""),
            priority: fields::string_or(obj, PRIORITY, Priority::Medium.as_str()),
            status: fields::string_or(obj, STATUS, DEFAULT_STATUS),
            steps: fields::list(obj, STEPS[0], ProposalStep::from_json)?,
            created_at: fields::string(obj, CREATED_AT),
            updated_at: fields::string(obj, UPDATED_AT),
            extra: fields::extra(obj, PROPOSAL_KNOWN),
        })
    }

    /// The priority as a [`Priority`], when it is one of the documented values.
    #[must_use]
    pub fn priority_level(&self) -> Option<Priority> {
        self.priority.parse().ok()
    }
}

deserialize_via_from_json!(Proposal);
