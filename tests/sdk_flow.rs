//! End-to-end flow through the `xskynet` umbrella crate.
//!
//! Walks a realistic session against a mock deployment: discover agents,
//! heartbeat, file a proposal, then read it back directly and through its
//! mission. No live deployment needed.

use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xskynet::prelude::*;

struct Deployment {
    server: MockServer,
    rt: Runtime,
}

impl Deployment {
    fn start() -> Self {
        let rt = Runtime::new().expect("tokio runtime");
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    fn route(&self, verb: &str, route: &str, body: Value) {
        self.rt.block_on(
            Mock::given(method(verb))
                .and(path(route))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&self.server),
        );
    }

    fn client(&self) -> XSkynetClient {
        ClientConfig::new(self.server.uri(), "flow-key")
            .max_retries(0)
            .build()
            .expect("client builds")
    }

    fn sent_bodies(&self, route: &str) -> Vec<Value> {
        self.rt
            .block_on(self.server.received_requests())
            .expect("request recording is enabled")
            .into_iter()
            .filter(|r| r.url.path() == route)
            .map(|r| r.body_json().expect("JSON body"))
            .collect()
    }
}

fn stored_proposal() -> Value {
    json!({
        "id": "prop-42",
        "title": "Research AI trends",
        "description": "Write a report on the latest developments",
        "proposedBy": "nova",
        "priority": "high",
        "status": "pending",
        "createdAt": "2026-02-23T00:00:00Z",
        "steps": [
            {"title": "Research", "assignedTo": "scout", "prompt": "Find the latest AI news", "status": "pending"},
            {"title": "Write", "assigned_to": "quill", "prompt": "Summarize", "status": "pending", "result": null},
        ],
        "reviewer": "sage",
    })
}

#[test]
fn proposal_lifecycle_round_trip() {
    let deployment = Deployment::start();
    deployment.route(
        "GET",
        "/api/ops/agents",
        json!({"agents": [
            {"id": "scout", "name": "Scout", "role": "researcher", "status": "healthy"},
            {"id": "quill", "name": "Quill", "role": "writer", "status": "idle"},
        ]}),
    );
    deployment.route("POST", "/api/ops/agents/nova/heartbeat", json!({"ok": true}));
    deployment.route("POST", "/api/ops/proposals", json!({"proposal": stored_proposal()}));
    deployment.route("GET", "/api/ops/proposals/prop-42", stored_proposal());
    deployment.route(
        "GET",
        "/api/ops/missions/m-1",
        json!({"mission": {
            "id": "m-1",
            "title": "Quarterly research",
            "proposals": [stored_proposal()],
            "createdAt": "2026-02-22T00:00:00Z",
        }}),
    );

    let client = deployment.client();

    let agents = client.list_agents().expect("list agents");
    let writer = agents
        .iter()
        .find(|a| a.role == "writer")
        .expect("a writer is registered");
    assert_eq!(writer.id, "quill");

    let ack = client.send_heartbeat("nova").expect("heartbeat");
    assert_eq!(ack, Some(json!({"ok": true})));

    let request = NewProposal::new(
        "Research AI trends",
        "Write a report on the latest developments",
    )
    .proposed_by("nova")
    .priority(Priority::High)
    .step(ProposalStep::new("Research", "scout", "Find the latest AI news"))
    .step(ProposalStep::new("Write", writer.id.clone(), "Summarize"));
    let created = client.create_proposal(&request).expect("create proposal");

    assert_eq!(created.id, "prop-42");
    assert_eq!(created.priority_level(), Some(Priority::High));
    assert_eq!(created.steps.len(), 2);
    assert_eq!(created.steps[1].assigned_to, writer.id);
    assert_eq!(created.extra["reviewer"], "sage");

    let fetched = client.get_proposal(&created.id).expect("get proposal");
    assert_eq!(fetched, created);

    let mission = client.get_mission("m-1").expect("get mission");
    assert_eq!(mission.status, "active");
    assert_eq!(mission.proposals, vec![created]);

    let sent = deployment.sent_bodies("/api/ops/proposals");
    assert_eq!(
        sent,
        vec![json!({
            "title": "Research AI trends",
            "description": "Write a report on the latest developments",
            "proposed_by": "nova",
            "priority": "high",
            "steps": [
                {"title": "Research", "assigned_to": "scout", "prompt": "Find the latest AI news"},
                {"title": "Write", "assigned_to": "quill", "prompt": "Summarize"},
            ],
        })]
    );

    client.close();
}

#[test]
fn listing_follows_default_limits() {
    let deployment = Deployment::start();
    deployment.rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/ops/missions"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "m-1"}]})))
            .expect(1)
            .mount(&deployment.server),
    );
    deployment.rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/ops/proposals"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&deployment.server),
    );

    let client = deployment.client();
    let missions = client
        .list_missions(xskynet::client::DEFAULT_MISSION_LIMIT)
        .expect("list missions");
    assert_eq!(missions[0].id, "m-1");
    assert!(
        client
            .list_proposals(&ProposalFilter::default())
            .expect("list proposals")
            .is_empty()
    );

    deployment.rt.block_on(deployment.server.verify());
}

#[test]
fn records_re_serialize_with_unknown_fields() {
    let proposal: Proposal = serde_json::from_value(stored_proposal()).expect("decodes");
    let encoded = serde_json::to_value(&proposal).expect("encodes");
    assert_eq!(encoded["reviewer"], "sage");
    assert_eq!(encoded["proposed_by"], "nova");

    let again: Proposal = serde_json::from_value(encoded).expect("decodes again");
    assert_eq!(again, proposal);
}
