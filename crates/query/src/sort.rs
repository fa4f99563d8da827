//! Orderings for the chemical list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chemtrack_inventory::{ChemicalRecord, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::quantity::QuantityLevel;

/// The available orderings for the chemical list.
///
/// Every comparison is total, so any record collection can be sorted under
/// any key. Records missing the sorted-on field (or carrying an unparsable
/// date) compare after all well-formed records, and the engine's stable
/// sort keeps their relative input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most recent purchase date first.
    NewestFirst,
    /// Earliest purchase date first.
    OldestFirst,
    /// `Good` stock first, then `Fair`, then `Low`.
    StatusHighToLow,
    /// `Low` stock first, then `Fair`, then `Good`.
    StatusLowToHigh,
    /// Scarcest quantity first, by the `Low`/`Fair`/`Good` vocabulary.
    LowestQuantityFirst,
    /// Name ascending, case-sensitive.
    #[default]
    NameAToZ,
    /// Name descending, case-sensitive.
    NameZToA,
    /// Earliest expiration date first.
    ByExpiration,
}

impl SortKey {
    /// Compares two records under this ordering.
    pub fn compare(&self, a: &ChemicalRecord, b: &ChemicalRecord) -> Ordering {
        match self {
            SortKey::NewestFirst => date_desc(a.purchased_on(), b.purchased_on()),
            SortKey::OldestFirst => date_asc(a.purchased_on(), b.purchased_on()),
            SortKey::StatusHighToLow => {
                good_first(a.status.as_ref()).cmp(&good_first(b.status.as_ref()))
            }
            SortKey::StatusLowToHigh => {
                low_first(a.status.as_ref()).cmp(&low_first(b.status.as_ref()))
            }
            SortKey::LowestQuantityFirst => quantity_priority(a.quantity.as_deref())
                .cmp(&quantity_priority(b.quantity.as_deref())),
            SortKey::NameAToZ => a.name.cmp(&b.name),
            SortKey::NameZToA => b.name.cmp(&a.name),
            SortKey::ByExpiration => date_asc(a.expires_on(), b.expires_on()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::NewestFirst => "newest-first",
            SortKey::OldestFirst => "oldest-first",
            SortKey::StatusHighToLow => "status-high-to-low",
            SortKey::StatusLowToHigh => "status-low-to-high",
            SortKey::LowestQuantityFirst => "lowest-quantity-first",
            SortKey::NameAToZ => "name-a-to-z",
            SortKey::NameZToA => "name-z-to-a",
            SortKey::ByExpiration => "by-expiration",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest-first" => Ok(SortKey::NewestFirst),
            "oldest-first" => Ok(SortKey::OldestFirst),
            "status-high-to-low" => Ok(SortKey::StatusHighToLow),
            "status-low-to-high" => Ok(SortKey::StatusLowToHigh),
            "lowest-quantity-first" => Ok(SortKey::LowestQuantityFirst),
            "name-a-to-z" => Ok(SortKey::NameAToZ),
            "name-z-to-a" => Ok(SortKey::NameZToA),
            "by-expiration" => Ok(SortKey::ByExpiration),
            _ => Err(format!("unknown sort key: {}", s)),
        }
    }
}

/// Ascending by date; dateless records after every dated one.
fn date_asc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending by date; dateless records still after every dated one.
fn date_desc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Priority with `Low` first; `Off-site`, unknown, and missing statuses
/// all take the trailing slot.
fn low_first(status: Option<&Status>) -> u8 {
    match status {
        Some(Status::Low) => 1,
        Some(Status::Fair) => 2,
        Some(Status::Good) => 3,
        _ => 4,
    }
}

/// Priority with `Good` first; the trailing slot as above.
fn good_first(status: Option<&Status>) -> u8 {
    match status {
        Some(Status::Good) => 1,
        Some(Status::Fair) => 2,
        Some(Status::Low) => 3,
        _ => 4,
    }
}

/// Priority for the free-text quantity; text outside the stock vocabulary
/// and missing quantities sort last.
fn quantity_priority(quantity: Option<&str>) -> u8 {
    quantity
        .and_then(QuantityLevel::of)
        .map_or(4, |level| level.priority())
}
