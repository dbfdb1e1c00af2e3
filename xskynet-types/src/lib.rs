#![deny(missing_docs)]
//! Record types and errors for the X-Skynet orchestration API.
//!
//! Every record is decoded from a loosely structured JSON object with
//! `from_json` (or `serde::Deserialize`, which delegates to it). Decoding
//! accepts both the snake_case and camelCase spellings the server has used
//! over time, fills documented defaults for missing fields, and keeps any
//! unrecognized keys in the record's `extra` map.

pub mod agent;
pub mod error;
mod fields;
pub mod id;
pub mod mission;
pub mod proposal;
pub mod request;

pub use agent::Agent;
pub use error::{ApiError, RETRYABLE_STATUSES, Result, SdkError};
pub use id::{AgentId, MissionId, ProposalId};
pub use mission::Mission;
pub use proposal::{Priority, Proposal, ProposalStep, UnknownPriority};
pub use request::{NewProposal, StepInput};
