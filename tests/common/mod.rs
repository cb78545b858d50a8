//! In-process stub of the three demo services, shared by the integration
//! tests. One listener serves all three base URLs; every write request is
//! recorded so tests can assert on exactly what went over the wire.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use evoting_client::api::Services;
use evoting_client::Config;

/// Everything the stub serves and records.
#[derive(Debug, Default)]
pub struct StubState {
    pub voters: Vec<Value>,
    pub candidates: Vec<Value>,
    pub proposals: Vec<Value>,
    pub results: Vec<Value>,
    /// Bodies of every `POST /voters` received.
    pub registrations: Vec<Value>,
    /// Bodies of every `POST /votes/submit` received.
    pub votes: Vec<Value>,
    /// Rejection for the next registration, as (status, body).
    pub registration_rejection: Option<(u16, Value)>,
    /// Rejection for the next vote submission, as (status, body).
    pub vote_rejection: Option<(u16, Value)>,
    /// Make `GET /candidates` fail, to exercise the fail-fast load.
    pub fail_candidates: bool,
}

type Shared = Arc<Mutex<StubState>>;

pub struct Stub {
    base_url: String,
    pub state: Shared,
}

impl Stub {
    /// Bind an ephemeral port and serve the three services from `initial`.
    pub async fn spawn(initial: StubState) -> Self {
        let state = Arc::new(Mutex::new(initial));
        let app = Router::new()
            .route("/voters", get(list_voters).post(register_voter))
            .route("/candidates", get(list_candidates))
            .route("/proposals", get(list_proposals))
            .route("/votes/submit", post(submit_vote))
            .route("/results", get(list_results))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn config(&self) -> Config {
        Config::new(&self.base_url, &self.base_url, &self.base_url)
    }

    pub fn services(&self) -> Services {
        Services::new(&self.config())
    }
}

async fn list_voters(State(state): State<Shared>) -> Json<Value> {
    let state = state.lock().unwrap();
    Json(json!({ "_embedded": { "voters": state.voters.clone() } }))
}

async fn register_voter(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    if let Some((status, body)) = state.registration_rejection.take() {
        return (StatusCode::from_u16(status).unwrap(), Json(body));
    }
    state.registrations.push(body.clone());
    state.voters.push(body);
    (StatusCode::CREATED, Json(json!({})))
}

async fn list_candidates(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    let state = state.lock().unwrap();
    if state.fail_candidates {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "candidate store offline" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "_embedded": { "candidates": state.candidates.clone() } })),
    )
}

async fn list_proposals(State(state): State<Shared>) -> Json<Value> {
    let state = state.lock().unwrap();
    Json(json!({ "_embedded": { "proposals": state.proposals.clone() } }))
}

async fn submit_vote(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    if let Some((status, body)) = state.vote_rejection.take() {
        return (StatusCode::from_u16(status).unwrap(), Json(body));
    }
    // The backend flips `hasVoted`; dropping the voter from the list has the
    // same effect on the eligible-voter fetch.
    let cin = body["voterCin"].clone();
    state.voters.retain(|v| v["cin"] != cin);
    state.votes.push(body);
    (StatusCode::OK, Json(json!({})))
}

async fn list_results(State(state): State<Shared>) -> Json<Value> {
    let state = state.lock().unwrap();
    if state.results.is_empty() {
        // No envelope at all; clients must treat this as an empty list.
        return Json(json!({}));
    }
    Json(json!({ "_embedded": { "voteResults": state.results.clone() } }))
}

pub fn voter(cin: &str, first_name: &str, last_name: &str, has_voted: bool) -> Value {
    json!({
        "cin": cin,
        "firstName": first_name,
        "lastName": last_name,
        "email": format!("{}.{}@example.com",
            first_name.to_lowercase(), last_name.to_lowercase()),
        "dateOfBirth": "1990-04-02",
        "address": "12 rue de la Paix",
        "isActive": true,
        "hasVoted": has_voted
    })
}

pub fn candidate(id: u32, name: &str, party: &str) -> Value {
    json!({ "id": id, "name": name, "party": party, "program": "" })
}

pub fn proposal(id: u32, title: &str, active: bool) -> Value {
    json!({ "id": id, "title": title, "active": active })
}

pub fn result_entry(name: &str, total_votes: u64) -> Value {
    json!({ "candidateName": name, "party": "", "totalVotes": total_votes })
}
