//! Query criteria supplied by the client.

use std::collections::HashSet;

use chemtrack_inventory::Status;
use serde::{Deserialize, Serialize};

use crate::buckets::{ExpirationBucket, PurchaseBucket};
use crate::quantity::QuantityLevel;
use crate::sort::SortKey;

/// The full set of user-selected criteria for one query.
///
/// The default value matches every record and sorts by name ascending, the
/// list screen's initial state. Every filter follows the same convention:
/// an empty set accepts all records. Serializes compactly for saved views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryCriteria {
    /// Free-text search term. Empty matches everything.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search_text: String,

    /// Accepted statuses. Empty accepts all.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub status_filter: HashSet<Status>,

    /// Accepted quantity levels. Empty accepts all.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub quantity_filter: HashSet<QuantityLevel>,

    /// Accepted purchase date buckets. Empty accepts all.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub purchase_date_filter: HashSet<PurchaseBucket>,

    /// Accepted expiration date buckets. Empty accepts all.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub expiration_date_filter: HashSet<ExpirationBucket>,

    /// The ordering applied after filtering.
    #[serde(default)]
    pub sort_key: SortKey,

    /// Whether the school field participates in text search. Only the
    /// master role searches across schools.
    #[serde(default)]
    pub include_school_in_search: bool,
}

impl QueryCriteria {
    /// Creates criteria that match every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Adds an accepted status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status_filter.insert(status);
        self
    }

    /// Adds an accepted quantity level.
    pub fn with_quantity_level(mut self, level: QuantityLevel) -> Self {
        self.quantity_filter.insert(level);
        self
    }

    /// Adds an accepted purchase date bucket.
    pub fn with_purchase_bucket(mut self, bucket: PurchaseBucket) -> Self {
        self.purchase_date_filter.insert(bucket);
        self
    }

    /// Adds an accepted expiration date bucket.
    pub fn with_expiration_bucket(mut self, bucket: ExpirationBucket) -> Self {
        self.expiration_date_filter.insert(bucket);
        self
    }

    /// Sets the ordering.
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Includes the school field in text search.
    pub fn with_school_search(mut self) -> Self {
        self.include_school_in_search = true;
        self
    }

    /// Returns true if no search term or filter is active, i.e. every
    /// record passes the filtering stage.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && self.status_filter.is_empty()
            && self.quantity_filter.is_empty()
            && self.purchase_date_filter.is_empty()
            && self.expiration_date_filter.is_empty()
    }
}
