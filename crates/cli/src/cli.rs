//! Command line configuration.
//!
//! Flags can also be supplied through the environment:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CHEMTRACK_INPUT` | — | JSON file holding the inventory (`-` for stdin) |
//! | `CHEMTRACK_SERVER` | — | Backend base URL to fetch from |
//! | `CHEMTRACK_SCHOOL` | — | School scope for a server fetch |
//! | `CHEMTRACK_SEARCH_SCHOOL` | false | Include the school field in search |
//! | `CHEMTRACK_LOG_LEVEL` | warn | Log level |

use std::path::PathBuf;

use chemtrack_inventory::Status;
use chemtrack_query::{ExpirationBucket, PurchaseBucket, QuantityLevel, QueryCriteria, SortKey};
use clap::Parser;

use crate::output::OutputFormat;

/// Filter, search, and sort a ChemTrack chemical inventory.
#[derive(Debug, Clone, Parser)]
#[command(name = "chemtrack")]
#[command(about = "Filter, search, and sort a ChemTrack chemical inventory")]
pub struct Cli {
    /// JSON file holding an array of chemical records ("-" for stdin).
    #[arg(short, long, env = "CHEMTRACK_INPUT")]
    pub input: Option<PathBuf>,

    /// Backend base URL to fetch the inventory from.
    #[arg(long, env = "CHEMTRACK_SERVER")]
    pub server: Option<String>,

    /// Restrict a server fetch to one school's inventory.
    #[arg(long, env = "CHEMTRACK_SCHOOL")]
    pub school: Option<String>,

    /// Free-text search term.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Accepted status value, repeatable. None accepts all.
    #[arg(long = "status")]
    pub statuses: Vec<Status>,

    /// Accepted quantity level, repeatable: Low, Fair, Good. None
    /// accepts all.
    #[arg(long = "quantity")]
    pub quantities: Vec<QuantityLevel>,

    /// Accepted purchase date bucket, repeatable: "Before 2020",
    /// "2020-2024", "After 2024".
    #[arg(long = "purchased")]
    pub purchased: Vec<PurchaseBucket>,

    /// Accepted expiration date bucket, repeatable: "Before 2025",
    /// "2025-2030", "After 2030".
    #[arg(long = "expires")]
    pub expires: Vec<ExpirationBucket>,

    /// Sort order: newest-first, oldest-first, status-high-to-low,
    /// status-low-to-high, lowest-quantity-first, name-a-to-z,
    /// name-z-to-a, by-expiration.
    #[arg(long, default_value = "name-a-to-z")]
    pub sort: SortKey,

    /// Also match the school field during text search (master role only).
    #[arg(long, env = "CHEMTRACK_SEARCH_SCHOOL")]
    pub include_school_in_search: bool,

    /// Output format: table, json, or csv.
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CHEMTRACK_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Checks flag combinations that clap cannot express.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.input.is_none() && self.server.is_none() {
            errors.push("one of --input or --server is required".to_string());
        }
        if self.input.is_some() && self.server.is_some() {
            errors.push("--input and --server are mutually exclusive".to_string());
        }
        if self.school.is_some() && self.server.is_none() {
            errors.push("--school only applies to --server fetches".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Assembles the engine criteria from the parsed flags.
    ///
    /// The search term is trimmed and case-folded here; the engine's own
    /// normalization handles the rest.
    pub fn criteria(&self) -> QueryCriteria {
        let mut criteria = QueryCriteria::new()
            .with_search(self.search.trim().to_lowercase())
            .with_sort(self.sort);

        for status in &self.statuses {
            criteria = criteria.with_status(status.clone());
        }
        for level in &self.quantities {
            criteria = criteria.with_quantity_level(*level);
        }
        for bucket in &self.purchased {
            criteria = criteria.with_purchase_bucket(*bucket);
        }
        for bucket in &self.expires {
            criteria = criteria.with_expiration_bucket(*bucket);
        }
        if self.include_school_in_search {
            criteria = criteria.with_school_search();
        }

        criteria
    }
}
