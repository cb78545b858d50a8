/// Base addresses of the three backend services. The defaults match the
/// demo deployment; the CLI can override each via flag or `EVOTE_*`
/// environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    voter_url: String,
    ballot_url: String,
    results_url: String,
}

const DEFAULT_VOTER_URL: &str = "http://localhost:8081";
const DEFAULT_BALLOT_URL: &str = "http://localhost:8082";
const DEFAULT_RESULTS_URL: &str = "http://localhost:8083";

impl Config {
    pub fn new(
        voter_url: impl Into<String>,
        ballot_url: impl Into<String>,
        results_url: impl Into<String>,
    ) -> Self {
        Self {
            voter_url: voter_url.into(),
            ballot_url: ballot_url.into(),
            results_url: results_url.into(),
        }
    }

    /// Where the voter registry lives (`GET /voters`, `POST /voters`).
    pub fn voter_url(&self) -> &str {
        &self.voter_url
    }

    /// Where the ballot service lives (`GET /candidates`, `GET /proposals`,
    /// `POST /votes/submit`).
    pub fn ballot_url(&self) -> &str {
        &self.ballot_url
    }

    /// Where the results aggregator lives (`GET /results`).
    pub fn results_url(&self) -> &str {
        &self.results_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_VOTER_URL, DEFAULT_BALLOT_URL, DEFAULT_RESULTS_URL)
    }
}
