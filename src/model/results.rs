use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One aggregated tally row as returned by the results service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    #[serde(default)]
    pub candidate_id: u32,
    pub candidate_name: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub total_votes: u64,
}

/// A ranked scoreboard line. The percentage is of all votes cast, `0.0`
/// when nothing has been cast yet; counts stay integers and the rounding
/// to one decimal happens at display time only.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: ResultEntry,
    pub percentage: f64,
}

impl Display for RankedEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.1}%)", self.entry.candidate_name, self.percentage)
    }
}

/// The full tally, ranked by descending vote count. Ties keep the order the
/// service returned them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scoreboard {
    entries: Vec<RankedEntry>,
    total_votes: u64,
}

impl Scoreboard {
    pub fn new(mut entries: Vec<ResultEntry>) -> Self {
        // Stable sort, so equal tallies preserve the backend's order.
        entries.sort_by(|a, b| b.total_votes.cmp(&a.total_votes));

        let total_votes: u64 = entries.iter().map(|e| e.total_votes).sum();
        let ranked = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let percentage = if total_votes == 0 {
                    0.0
                } else {
                    entry.total_votes as f64 / total_votes as f64 * 100.0
                };
                RankedEntry {
                    rank: i + 1,
                    entry,
                    percentage,
                }
            })
            .collect();

        Self {
            entries: ranked,
            total_votes,
        }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Total participation across all candidates.
    pub fn total_votes(&self) -> u64 {
        self.total_votes
    }

    /// The current front-runner, if any results exist at all.
    pub fn leader(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
