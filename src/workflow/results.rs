use std::time::Duration;

use log::error;

use crate::api::ResultsService;
use crate::model::Scoreboard;

use super::Notice;

const RESULTS_ERROR_MESSAGE: &str = "Unable to load the results.";

/// Results flow: fetch and rank the tally, with an optional fixed-interval
/// refresh loop.
pub struct ResultsFlow {
    service: ResultsService,
    scoreboard: Scoreboard,
}

impl ResultsFlow {
    pub fn new(service: ResultsService) -> Self {
        Self {
            service,
            scoreboard: Scoreboard::default(),
        }
    }

    /// The last successfully fetched scoreboard (empty before the first
    /// refresh). A failed refresh keeps the previous board.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Fetch the current tallies and rank them.
    pub async fn refresh(&mut self) -> std::result::Result<&Scoreboard, Notice> {
        match self.service.results().await {
            Ok(entries) => {
                self.scoreboard = Scoreboard::new(entries);
                Ok(&self.scoreboard)
            }
            Err(err) => {
                error!("Results fetch failed: {err}");
                Err(Notice::error(RESULTS_ERROR_MESSAGE))
            }
        }
    }

    /// Refresh immediately and then once per `period`, handing each outcome
    /// to `render`. Runs until the returned future is dropped; dropping it
    /// tears down the timer and nothing else.
    pub async fn watch<F>(&mut self, period: Duration, mut render: F)
    where
        F: FnMut(std::result::Result<&Scoreboard, &Notice>),
    {
        let mut timer = tokio::time::interval(period);
        loop {
            // The first tick completes immediately.
            timer.tick().await;
            match self.refresh().await {
                Ok(board) => render(Ok(board)),
                Err(notice) => render(Err(&notice)),
            }
        }
    }
}
