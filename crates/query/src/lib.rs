//! ChemTrack chemical list query engine.
//!
//! Given an in-memory collection of [`ChemicalRecord`]s and a set of
//! user-selected [`QueryCriteria`], [`select`] produces the ordered subset
//! to display. The engine is a pure function of its inputs: no I/O, no
//! shared state, no mutation of the records, and it is cheap enough to
//! re-run on every keystroke or filter toggle.
//!
//! Filtering combines the independent criteria with logical AND:
//!
//! - free-text search over name, CAS number, location, and (for privileged
//!   callers) school, matched on lowercase alphanumeric characters only,
//! - a status set (empty accepts all),
//! - a quantity level set matched against the stock vocabulary,
//! - purchase date buckets and expiration date buckets (empty accepts all).
//!
//! Sorting is stable, so records that compare equal keep their input order.
//! Malformed data never causes an error: records with missing or
//! unparsable fields fail active filters and sort after well-formed ones.
//!
//! # Quick Start
//!
//! ```
//! use chemtrack_inventory::{ChemicalRecord, Status};
//! use chemtrack_query::{QueryCriteria, SortKey, select};
//!
//! let records = vec![
//!     ChemicalRecord::new("1", "Acetone")
//!         .with_cas("67641")
//!         .with_status(Status::Good)
//!         .with_purchase_date("2021-05-01"),
//!     ChemicalRecord::new("2", "Benzene")
//!         .with_cas("71432")
//!         .with_status(Status::Low)
//!         .with_purchase_date("2019-01-01"),
//! ];
//!
//! let criteria = QueryCriteria::new().with_search("acet");
//! let view = select(&records, &criteria);
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].name, "Acetone");
//!
//! let oldest = QueryCriteria::new().with_sort(SortKey::OldestFirst);
//! let view = select(&records, &oldest);
//! assert_eq!(view[0].name, "Benzene");
//! ```

#![warn(missing_docs)]

pub mod buckets;
pub mod criteria;
pub mod engine;
pub mod quantity;
pub mod search;
pub mod sort;

pub use buckets::{ExpirationBucket, PurchaseBucket};
pub use criteria::QueryCriteria;
pub use engine::select;
pub use quantity::QuantityLevel;
pub use sort::SortKey;
