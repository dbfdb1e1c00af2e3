#![deny(missing_docs)]
//! Blocking HTTP client for the X-Skynet orchestration API.
//!
//! [`XSkynetClient`] wraps one authenticated `reqwest` blocking client and
//! exposes one method per remote operation: agents, heartbeats, proposals,
//! and missions. Every call goes through a single request helper that
//! applies the timeout, retries transient statuses with exponential backoff,
//! turns any other non-2xx status into [`SdkError::Api`], and normalizes
//! wrapped-or-bare response bodies before decoding them into records.

pub mod client;
pub mod config;
pub(crate) mod error;
pub mod query;
pub(crate) mod retry;
pub(crate) mod shape;

pub use client::{DEFAULT_HEARTBEAT_STATUS, XSkynetClient};
pub use config::{
    ClientConfig, DEFAULT_BACKOFF_FACTOR, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
pub use query::{DEFAULT_MISSION_LIMIT, DEFAULT_PROPOSAL_LIMIT, ProposalFilter};

// Re-export xskynet-types for convenience
pub use xskynet_types::{
    Agent, AgentId, ApiError, Mission, MissionId, NewProposal, Priority, Proposal, ProposalId,
    ProposalStep, Result, SdkError, StepInput,
};
