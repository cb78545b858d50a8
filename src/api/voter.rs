use reqwest::Client;

use crate::error::Result;
use crate::model::{Embedded, Voter};

use super::check_status;

/// Binding for the voter registry service.
#[derive(Debug, Clone)]
pub struct VoterService {
    http: Client,
    base_url: String,
}

impl VoterService {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// `POST /voters`. A 2xx needs no body.
    pub async fn register(&self, voter: &Voter) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/voters", self.base_url))
            .json(voter)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `GET /voters`, filtered down to voters who may still vote
    /// (active and not yet voted). The registry itself returns everyone.
    pub async fn eligible_voters(&self) -> Result<Vec<Voter>> {
        let response = self
            .http
            .get(format!("{}/voters", self.base_url))
            .send()
            .await?;
        let envelope: Embedded<Voter> = check_status(response).await?.json().await?;
        Ok(envelope
            .into_items("voters")
            .into_iter()
            .filter(Voter::is_eligible)
            .collect())
    }
}
