use log::{error, info, warn};

use crate::api::{BallotService, VoterService};
use crate::error::{Error, Result};
use crate::model::{Candidate, Cin, Proposal, VoteSubmission, Voter};

use super::Notice;

const LOAD_ERROR_MESSAGE: &str = "Unable to load the ballot data.";
const INCOMPLETE_SELECTION_MESSAGE: &str =
    "Select a voter, a candidate and a proposal before casting a vote.";
const VOTE_RECORDED_MESSAGE: &str = "Your vote has been recorded.";

/// Lifecycle of one voting session. `Ready` is re-entered after success and
/// failure alike; a voter who voted simply drops out of the next
/// eligible-voter refresh.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Submitting,
}

/// Vote-casting flow: one concurrent load, a guarded selection, a single
/// fire-and-forget submission, then a refresh of the eligible voters.
pub struct VotingFlow {
    registry: VoterService,
    ballots: BallotService,
    phase: Phase,
    voters: Vec<Voter>,
    candidates: Vec<Candidate>,
    proposals: Vec<Proposal>,
    selected_voter: Option<Cin>,
    selected_candidate: Option<u32>,
    selected_proposal: Option<u32>,
}

impl VotingFlow {
    pub fn new(registry: VoterService, ballots: BallotService) -> Self {
        Self {
            registry,
            ballots,
            phase: Phase::Loading,
            voters: Vec::new(),
            candidates: Vec::new(),
            proposals: Vec::new(),
            selected_voter: None,
            selected_candidate: None,
            selected_proposal: None,
        }
    }

    /// Fetch the three collections the ballot screen needs, concurrently and
    /// fail-fast: if any read fails the whole load fails and nothing is
    /// rendered from partial data. When exactly one proposal is active it is
    /// pre-selected.
    pub async fn load(&mut self) -> std::result::Result<(), Notice> {
        self.phase = Phase::Loading;
        match self.fetch_collections().await {
            Ok((voters, candidates, proposals)) => {
                let mut active = proposals.iter().filter(|p| p.active);
                self.selected_proposal = match (active.next(), active.next()) {
                    (Some(only), None) => Some(only.id),
                    _ => None,
                };
                self.voters = voters;
                self.candidates = candidates;
                self.proposals = proposals;
                self.phase = Phase::Ready;
                info!(
                    "Ballot loaded: {} eligible voters, {} candidates, {} proposals",
                    self.voters.len(),
                    self.candidates.len(),
                    self.proposals.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("Ballot load failed: {err}");
                Err(Notice::error(LOAD_ERROR_MESSAGE))
            }
        }
    }

    async fn fetch_collections(&self) -> Result<(Vec<Voter>, Vec<Candidate>, Vec<Proposal>)> {
        tokio::try_join!(
            self.registry.eligible_voters(),
            self.ballots.candidates(),
            self.ballots.proposals(),
        )
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn voters(&self) -> &[Voter] {
        &self.voters
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Proposals currently open for voting.
    pub fn active_proposals(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.iter().filter(|p| p.active)
    }

    pub fn selected_voter(&self) -> Option<&Cin> {
        self.selected_voter.as_ref()
    }

    pub fn selected_candidate(&self) -> Option<u32> {
        self.selected_candidate
    }

    pub fn selected_proposal(&self) -> Option<u32> {
        self.selected_proposal
    }

    /// Pick the voter casting this ballot; must be in the eligible list.
    pub fn select_voter(&mut self, cin: &Cin) -> Result<()> {
        if self.voters.iter().any(|v| v.cin == *cin) {
            self.selected_voter = Some(cin.clone());
            Ok(())
        } else {
            Err(Error::invalid(format!("No eligible voter with CIN {cin}")))
        }
    }

    pub fn select_candidate(&mut self, id: u32) -> Result<()> {
        if self.candidates.iter().any(|c| c.id == id) {
            self.selected_candidate = Some(id);
            Ok(())
        } else {
            Err(Error::invalid(format!("No candidate with id {id}")))
        }
    }

    /// Pick the proposal to vote on; only active proposals count.
    pub fn select_proposal(&mut self, id: u32) -> Result<()> {
        if self.active_proposals().any(|p| p.id == id) {
            self.selected_proposal = Some(id);
            Ok(())
        } else {
            Err(Error::invalid(format!("No active proposal with id {id}")))
        }
    }

    /// The submit action is enabled only when voter, candidate and proposal
    /// are all chosen and no submission is already in flight.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Ready
            && self.selected_voter.is_some()
            && self.selected_candidate.is_some()
            && self.selected_proposal.is_some()
    }

    /// Cast the vote: exactly one POST, no retry. On success the voter and
    /// candidate selections reset (the proposal selection is kept) and the
    /// eligible-voter list is re-fetched so the voter who just voted drops
    /// out. On failure the backend's message is displayed verbatim.
    pub async fn submit(&mut self) -> Notice {
        if !self.can_submit() {
            return Notice::error(INCOMPLETE_SELECTION_MESSAGE);
        }
        // `can_submit` guarantees all three are present.
        let submission = VoteSubmission {
            voter_cin: self.selected_voter.clone().unwrap(),
            candidate_id: self.selected_candidate.unwrap(),
            proposal_id: self.selected_proposal.unwrap(),
        };

        self.phase = Phase::Submitting;
        let outcome = self.ballots.submit_vote(&submission).await;
        self.phase = Phase::Ready;

        match outcome {
            Ok(()) => {
                info!("Vote recorded for {}", submission.voter_cin);
                self.selected_voter = None;
                self.selected_candidate = None;
                // A failed refresh is not a failed vote; the stale list only
                // lasts until the next successful load.
                match self.registry.eligible_voters().await {
                    Ok(voters) => self.voters = voters,
                    Err(err) => warn!("Eligible-voter refresh failed: {err}"),
                }
                Notice::success(VOTE_RECORDED_MESSAGE)
            }
            Err(err) => {
                error!("Vote submission failed: {err}");
                Notice::error(err.to_string())
            }
        }
    }
}
