use serde::{Deserialize, Serialize};

use super::cin::Cin;

/// A candidate standing in the current election. Read-only to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub program: String,
}

/// A ballot/referendum instance a vote is cast against. Read-only to the
/// client; at most one is expected to be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub active: bool,
}

/// The single vote record the ballot service accepts, write-once from the
/// client's perspective. There is no client-side identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSubmission {
    pub voter_cin: Cin,
    pub candidate_id: u32,
    pub proposal_id: u32,
}
