//! Registered agents.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, SdkError};
use crate::fields::{self, Field, Keys, deserialize_via_from_json};
use crate::id::AgentId;

const ID: Keys = &["id"];
const NAME: Keys = &["name"];
const STATUS: Keys = &["status"];
const ROLE: Keys = &["role"];
const MODEL: Keys = &["model"];
const LAST_HEARTBEAT: Keys = &["last_heartbeat", "lastHeartbeat"];

const KNOWN: &[Field] = &[
    Field::scalar(ID),
    Field::text(NAME),
    Field::text(STATUS),
    Field::text(ROLE),
    Field::text(MODEL),
    Field::text(LAST_HEARTBEAT),
];

/// A registered X-Skynet agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    /// Unique agent identifier (e.g. `"scout"`).
    pub id: AgentId,
    /// Human-readable display name. Defaults to the identifier.
    pub name: String,
    /// Current status (`"healthy"`, `"idle"`, `"busy"`, `"offline"`, ...).
    /// Defaults to `"unknown"`.
    pub status: String,
    /// Role or specialty description.
    pub role: String,
    /// Underlying LLM model name.
    pub model: String,
    /// ISO-8601 timestamp of the last heartbeat, if the server reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_heartbeat: Option<String>,
    /// Fields this SDK does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Agent {
    /// Decode an agent from a raw API object.
    ///
    /// `id` is required; a numeric or boolean id is kept as its JSON text.
    /// Everything else falls back to a default, and a value of the wrong
    /// type is kept in `extra`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = fields::object(value, "agent")?;
        let id = fields::scalar(obj, ID)
            .ok_or_else(|| SdkError::Shape("agent is missing a scalar 'id'".into()))?;

        Ok(Self {
            name: fields::string(obj, NAME).unwrap_or_else(|| id.clone()),
            status: fields::string_or(obj, STATUS, "unknown"),
            role: fields::string_or(obj, ROLE, ""),
            model: fields::string_or(obj, MODEL, ""),
            last_heartbeat: fields::string(obj, LAST_HEARTBEAT),
            extra: fields::extra(obj, KNOWN),
            id: AgentId(id),
        })
    }
}

deserialize_via_from_json!(Agent);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_basic_agent() {
        let agent = Agent::from_json(&json!({
            "id": "scout",
            "name": "Scout",
            "status": "healthy",
            "role": "Researcher",
        }))
        .unwrap();
        assert_eq!(agent.id, "scout");
        assert_eq!(agent.name, "Scout");
        assert_eq!(agent.status, "healthy");
        assert_eq!(agent.role, "Researcher");
        assert_eq!(agent.model, "");
        assert!(agent.last_heartbeat.is_none());
        assert!(agent.extra.is_empty());
    }

    #[test]
    fn minimal_agent_takes_defaults() {
        let agent = Agent::from_json(&json!({"id": "x"})).unwrap();
        assert_eq!(agent.id, "x");
        assert_eq!(agent.name, "x");
        assert_eq!(agent.status, "unknown");
    }

    #[test]
    fn camel_case_heartbeat_is_accepted() {
        let agent = Agent::from_json(&json!({
            "id": "minion",
            "lastHeartbeat": "2026-02-23T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(agent.last_heartbeat.as_deref(), Some("2026-02-23T00:00:00Z"));
        assert!(agent.extra.is_empty());
    }

    #[test]
    fn missing_id_is_a_shape_error() {
        let err = Agent::from_json(&json!({"name": "Ghost"})).unwrap_err();
        assert!(matches!(err, SdkError::Shape(msg) if msg.contains("'id'")));
    }

    #[test]
    fn numeric_id_is_rendered_as_text() {
        let agent = Agent::from_json(&json!({"id": 42, "name": "Answer"})).unwrap();
        assert_eq!(agent.id, "42");
        assert_eq!(agent.name, "Answer");
        assert!(agent.extra.is_empty());

        let agent = Agent::from_json(&json!({"id": false})).unwrap();
        assert_eq!(agent.id, "false");
        assert_eq!(agent.name, "false");
    }

    #[test]
    fn structured_id_is_a_shape_error() {
        for id in [json!(null), json!(["a"]), json!({"n": 1})] {
            let err = Agent::from_json(&json!({"id": id})).unwrap_err();
            assert!(matches!(err, SdkError::Shape(_)), "id {id} should be rejected");
        }
    }

    #[test]
    fn wrong_typed_field_is_kept_in_extra() {
        let agent = Agent::from_json(&json!({"id": "x", "status": {"state": "busy"}})).unwrap();
        assert_eq!(agent.status, "unknown");
        assert_eq!(agent.extra["status"], json!({"state": "busy"}));
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(Agent::from_json(&json!("scout")).is_err());
        assert!(Agent::from_json(&Value::Null).is_err());
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let agent = Agent::from_json(&json!({
            "id": "sage",
            "capabilities": ["search", "summarize"],
            "load": 0.5,
        }))
        .unwrap();
        assert_eq!(agent.extra["capabilities"], json!(["search", "summarize"]));
        assert_eq!(agent.extra["load"], json!(0.5));
    }

    #[test]
    fn serde_deserialize_matches_from_json() {
        let raw = r#"{"id":"quill","status":"busy","team":"docs"}"#;
        let agent: Agent = serde_json::from_str(raw).unwrap();
        assert_eq!(agent.status, "busy");
        assert_eq!(agent.extra["team"], "docs");
    }

    #[test]
    fn serialized_form_flattens_extra() {
        let agent = Agent::from_json(&json!({"id": "nova", "team": "core"})).unwrap();
        let out = serde_json::to_value(&agent).unwrap();
        assert_eq!(out["team"], "core");
        assert!(out.get("extra").is_none());
        assert_eq!(Agent::from_json(&out).unwrap(), agent);
    }
}
