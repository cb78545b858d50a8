//! Typed bindings for the three backend REST services. Each binding owns a
//! base URL and shares one HTTP client; all response normalisation (status
//! checks, error-body extraction, envelope unwrapping) happens here so the
//! workflows only ever see domain types and [`crate::Error`].

mod ballot;
mod results;
mod voter;

pub use ballot::BallotService;
pub use results::ResultsService;
pub use voter::VoterService;

use reqwest::{Client, Response};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};

/// The three service bindings over one shared HTTP connection pool.
/// Timeouts are left at the client library's defaults.
#[derive(Debug, Clone)]
pub struct Services {
    pub voters: VoterService,
    pub ballots: BallotService,
    pub results: ResultsService,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let http = Client::new();
        Self {
            voters: VoterService::new(http.clone(), config.voter_url()),
            ballots: BallotService::new(http.clone(), config.ballot_url()),
            results: ResultsService::new(http, config.results_url()),
        }
    }
}

/// The JSON body a service may attach to a rejection.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pass a 2xx response through; turn anything else into
/// [`Error::Rejected`], preferring the structured `message`/`error` field
/// over a generic fallback.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
        .and_then(|body| body.message.or(body.error))
        .unwrap_or_else(|| format!("Request rejected with status {status}"));

    Err(Error::Rejected { status, message })
}
