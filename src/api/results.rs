use reqwest::Client;

use crate::error::Result;
use crate::model::{Embedded, ResultEntry};

use super::check_status;

/// Binding for the results aggregator service.
#[derive(Debug, Clone)]
pub struct ResultsService {
    http: Client,
    base_url: String,
}

impl ResultsService {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// `GET /results`. Raw tallies in service order; ranking is the
    /// caller's business.
    pub async fn results(&self) -> Result<Vec<ResultEntry>> {
        let response = self
            .http
            .get(format!("{}/results", self.base_url))
            .send()
            .await?;
        let envelope: Embedded<ResultEntry> = check_status(response).await?.json().await?;
        Ok(envelope.into_items("voteResults"))
    }
}
