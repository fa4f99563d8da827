//! ChemTrack inventory record model.
//!
//! This crate defines the typed shape of a chemical inventory entry as the
//! ChemTrack backend serves it, along with the small helpers the rest of the
//! workspace needs to work with that data: status vocabulary, CAS number
//! formatting, and lenient calendar date parsing.
//!
//! The backend is not always tidy. Records may arrive with fields missing,
//! with dates that do not parse, or with status strings outside the expected
//! vocabulary. Everything here degrades instead of failing: an unparsable
//! date reads as no date, an unknown status is preserved verbatim, and an
//! untouched record serializes back to the JSON it came from.
//!
//! # Quick Start
//!
//! ```
//! use chemtrack_inventory::{ChemicalRecord, Status};
//!
//! let record = ChemicalRecord::new("chem-1", "Acetone")
//!     .with_cas("67641")
//!     .with_status(Status::Good)
//!     .with_purchase_date("2021-05-01");
//!
//! assert_eq!(record.formatted_cas().as_deref(), Some("67-64-1"));
//! assert!(record.purchased_on().is_some());
//!
//! // Bad data never raises.
//! let odd = ChemicalRecord::new("chem-2", "Benzene").with_purchase_date("not-a-date");
//! assert!(odd.purchased_on().is_none());
//! ```

#![warn(missing_docs)]

pub mod cas;
pub mod dates;
pub mod record;
pub mod status;

pub use cas::format_cas;
pub use dates::parse_date;
pub use record::ChemicalRecord;
pub use status::Status;
