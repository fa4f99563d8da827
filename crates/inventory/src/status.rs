//! Chemical status vocabulary.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A chemical's stock/condition state.
///
/// The backend uses a fixed four-value vocabulary, but it is not enforced
/// server-side, so anything else it sends is preserved verbatim in
/// [`Status::Other`]. That keeps status filtering exact (case-sensitive,
/// whole-string) and lets records round-trip through serde unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// Stock is running low.
    Low,
    /// Stock is adequate.
    Fair,
    /// Stock is plentiful.
    Good,
    /// Stored off-site.
    OffSite,
    /// A status string outside the fixed vocabulary, kept verbatim.
    Other(String),
}

impl Status {
    /// The canonical backend spelling of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Low => "Low",
            Status::Fair => "Fair",
            Status::Good => "Good",
            Status::OffSite => "Off-site",
            Status::Other(s) => s,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        // Case-sensitive on purpose: "low" is not the vocabulary value
        // "Low" and must not match a filter for it.
        match s.as_str() {
            "Low" => Status::Low,
            "Fair" => Status::Fair,
            "Good" => Status::Good,
            "Off-site" => Status::OffSite,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::from(s.to_string()))
    }
}
