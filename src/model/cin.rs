use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Two uppercase letters followed by six digits.
static CIN_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{6}$").unwrap());

/// A voter's national identity-card number, the unique voter identifier.
/// Construction goes through [`FromStr`], so a held `Cin` is always
/// well-formed; the registry remains authoritative for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cin {
    inner: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a valid CIN (expected 2 uppercase letters then 6 digits)")]
pub struct ParseCinError(String);

impl FromStr for Cin {
    type Err = ParseCinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if CIN_FORMAT.is_match(s) {
            Ok(Cin {
                inner: s.to_string(),
            })
        } else {
            Err(ParseCinError(s.to_string()))
        }
    }
}

impl TryFrom<String> for Cin {
    type Error = ParseCinError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Cin> for String {
    fn from(cin: Cin) -> Self {
        cin.inner
    }
}

impl Deref for Cin {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Display for Cin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
