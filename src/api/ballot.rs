use reqwest::Client;

use crate::error::Result;
use crate::model::{Candidate, Embedded, Proposal, VoteSubmission};

use super::check_status;

/// Binding for the ballot service: candidates, proposals, vote submission.
#[derive(Debug, Clone)]
pub struct BallotService {
    http: Client,
    base_url: String,
}

impl BallotService {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// `GET /candidates`.
    pub async fn candidates(&self) -> Result<Vec<Candidate>> {
        let response = self
            .http
            .get(format!("{}/candidates", self.base_url))
            .send()
            .await?;
        let envelope: Embedded<Candidate> = check_status(response).await?.json().await?;
        Ok(envelope.into_items("candidates"))
    }

    /// `GET /proposals`.
    pub async fn proposals(&self) -> Result<Vec<Proposal>> {
        let response = self
            .http
            .get(format!("{}/proposals", self.base_url))
            .send()
            .await?;
        let envelope: Embedded<Proposal> = check_status(response).await?.json().await?;
        Ok(envelope.into_items("proposals"))
    }

    /// `POST /votes/submit`. Fire-and-forget: no retry, no idempotency key,
    /// and a 2xx needs no body. Double-vote rejection is the backend's call.
    pub async fn submit_vote(&self, submission: &VoteSubmission) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/votes/submit", self.base_url))
            .json(submission)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
