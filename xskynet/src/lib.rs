#![deny(missing_docs)]
//! # xskynet: umbrella crate
//!
//! Single import surface for the X-Skynet SDK. The record types are always
//! available; the blocking HTTP client sits behind the default `client`
//! feature.
//!
//! ```no_run
//! use xskynet::prelude::*;
//!
//! let client = XSkynetClient::new("https://your-deployment.vercel.app", "your-api-key")?;
//! let proposal = client.create_proposal(
//!     &NewProposal::new("Research AI trends", "Write a report on the latest developments")
//!         .priority(Priority::High)
//!         .step(ProposalStep::new("Research", "scout", "Find the latest AI news")),
//! )?;
//! println!("created {}", proposal.id);
//! # Ok::<(), SdkError>(())
//! ```

pub use xskynet_types as types;

#[cfg(feature = "client")]
pub use xskynet_client as client;

/// Happy-path imports for talking to an X-Skynet deployment.
pub mod prelude {
    pub use xskynet_types::{
        Agent, AgentId, ApiError, Mission, MissionId, NewProposal, Priority, Proposal, ProposalId,
        ProposalStep, Result, SdkError, StepInput,
    };

    #[cfg(feature = "client")]
    pub use xskynet_client::{ClientConfig, ProposalFilter, XSkynetClient};
}
