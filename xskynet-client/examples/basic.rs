//! Basic usage of the X-Skynet client.
//!
//! Point it at a deployment and run:
//!   XSKYNET_URL=https://your-deployment.vercel.app XSKYNET_API_KEY=... \
//!     cargo run -p xskynet-client --example basic

use std::time::Duration;

use xskynet_client::{ClientConfig, NewProposal, Priority, ProposalFilter, ProposalStep};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let base_url = std::env::var("XSKYNET_URL")?;
    let api_key = std::env::var("XSKYNET_API_KEY")?;

    let client = ClientConfig::new(base_url, api_key)
        .timeout(Duration::from_secs(10))
        .build()?;

    for agent in client.list_agents()? {
        println!("{:<12} {:<10} {}", agent.id, agent.status, agent.role);
    }

    client.send_heartbeat("minion")?;

    let proposal = client.create_proposal(
        &NewProposal::new("Research AI trends", "Write a report on the latest developments")
            .proposed_by("nova")
            .priority(Priority::High)
            .step(ProposalStep::new("Research", "scout", "Find the latest AI news"))
            .step(ProposalStep::new("Write", "quill", "Summarize the findings")),
    )?;
    println!("created proposal {} ({})", proposal.id, proposal.status);

    let pending = client.list_proposals(&ProposalFilter::new().status("pending"))?;
    println!("{} pending proposals", pending.len());

    client.close();
    Ok(())
}
