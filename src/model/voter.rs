use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cin::Cin;

/// A voter record as exchanged with the registry service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub cin: Cin,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub has_voted: bool,
}

impl Voter {
    /// Eligible to vote: still active and not yet voted. The backend flips
    /// `has_voted` after a successful submission.
    pub fn is_eligible(&self) -> bool {
        self.is_active && !self.has_voted
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
