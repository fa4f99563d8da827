//! Named date-range filters.
//!
//! The client expresses date filtering as a small set of named year ranges
//! rather than arbitrary bounds. Purchase and expiration dates carry their
//! own fixed vocabularies; the `Display`/`FromStr` strings are the labels
//! the mobile client shows.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Year buckets for the purchase date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseBucket {
    /// Purchased before 2020.
    #[serde(rename = "Before 2020")]
    Before2020,
    /// Purchased in 2020 through 2024.
    #[serde(rename = "2020-2024")]
    From2020To2024,
    /// Purchased after 2024.
    #[serde(rename = "After 2024")]
    After2024,
}

impl PurchaseBucket {
    /// Returns true if `date` falls in this bucket.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let year = date.year();
        match self {
            PurchaseBucket::Before2020 => year < 2020,
            PurchaseBucket::From2020To2024 => (2020..=2024).contains(&year),
            PurchaseBucket::After2024 => year > 2024,
        }
    }
}

impl fmt::Display for PurchaseBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseBucket::Before2020 => write!(f, "Before 2020"),
            PurchaseBucket::From2020To2024 => write!(f, "2020-2024"),
            PurchaseBucket::After2024 => write!(f, "After 2024"),
        }
    }
}

impl FromStr for PurchaseBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Before 2020" => Ok(PurchaseBucket::Before2020),
            "2020-2024" => Ok(PurchaseBucket::From2020To2024),
            "After 2024" => Ok(PurchaseBucket::After2024),
            _ => Err(format!("unknown purchase date bucket: {}", s)),
        }
    }
}

/// Year buckets for the expiration date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpirationBucket {
    /// Expires before 2025.
    #[serde(rename = "Before 2025")]
    Before2025,
    /// Expires in 2025 through 2030.
    #[serde(rename = "2025-2030")]
    From2025To2030,
    /// Expires after 2030.
    #[serde(rename = "After 2030")]
    After2030,
}

impl ExpirationBucket {
    /// Returns true if `date` falls in this bucket.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let year = date.year();
        match self {
            ExpirationBucket::Before2025 => year < 2025,
            ExpirationBucket::From2025To2030 => (2025..=2030).contains(&year),
            ExpirationBucket::After2030 => year > 2030,
        }
    }
}

impl fmt::Display for ExpirationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpirationBucket::Before2025 => write!(f, "Before 2025"),
            ExpirationBucket::From2025To2030 => write!(f, "2025-2030"),
            ExpirationBucket::After2030 => write!(f, "After 2030"),
        }
    }
}

impl FromStr for ExpirationBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Before 2025" => Ok(ExpirationBucket::Before2025),
            "2025-2030" => Ok(ExpirationBucket::From2025To2030),
            "After 2030" => Ok(ExpirationBucket::After2030),
            _ => Err(format!("unknown expiration date bucket: {}", s)),
        }
    }
}
