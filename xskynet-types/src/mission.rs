//! Missions: high-level goals grouping proposals.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::fields::{self, Field, Keys, deserialize_via_from_json};
use crate::id::MissionId;
use crate::proposal::Proposal;

const ID: Keys = &["id"];
const TITLE: Keys = &["title"];
const DESCRIPTION: Keys = &["description"];
const STATUS: Keys = &["status"];
const PROPOSALS: Keys = &["proposals"];
const CREATED_AT: Keys = &["created_at", "createdAt"];

const KNOWN: &[Field] = &[
    Field::scalar(ID),
    Field::text(TITLE),
    Field::text(DESCRIPTION),
    Field::text(STATUS),
    Field::any(PROPOSALS),
    Field::text(CREATED_AT),
];

/// A high-level mission.
///
/// `proposals` reflects only what the response included; it is empty when
/// the server did not expand them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mission {
    /// Server-assigned identifier.
    pub id: MissionId,
    /// Short mission title.
    pub title: String,
    /// Detailed description.
    pub description: String,
    /// Lifecycle status. Defaults to `"active"`.
    pub status: String,
    /// Related proposals, if expanded.
    pub proposals: Vec<Proposal>,
    /// ISO-8601 creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Fields this SDK does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Mission {
    /// Decode a mission, including any expanded proposals, from a raw API object.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = fields::object(value, "mission")?;

        Ok(Self {
            id: MissionId(fields::scalar(obj, ID).unwrap_or_default()),
            title: fields::string_or(obj, TITLE, ""),
            description: fields::string_or(obj, DESCRIPTION, ""),
            status: fields::string_or(obj, STATUS, "active"),
            proposals: fields::list(obj, PROPOSALS[0], Proposal::from_json)?,
            created_at: fields::string(obj, CREATED_AT),
            extra: fields::extra(obj, KNOWN),
        })
    }
}

deserialize_via_from_json!(Mission);
