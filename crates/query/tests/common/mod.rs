//! Shared fixtures for the query integration tests.

use chemtrack_inventory::{ChemicalRecord, Status};

/// The two-record inventory several tests query against: one recent
/// `Good` solvent and one older `Low` one.
pub fn acetone_and_benzene() -> Vec<ChemicalRecord> {
    vec![
        ChemicalRecord::new("1", "Acetone")
            .with_cas("67641")
            .with_status(Status::Good)
            .with_purchase_date("2021-05-01"),
        ChemicalRecord::new("2", "Benzene")
            .with_cas("71432")
            .with_status(Status::Low)
            .with_purchase_date("2019-01-01"),
    ]
}

/// A broader inventory exercising every filterable field, including
/// deliberately degraded records (missing status, invalid date).
pub fn stockroom() -> Vec<ChemicalRecord> {
    vec![
        ChemicalRecord::new("1", "Acetone")
            .with_cas("67641")
            .with_status(Status::Good)
            .with_school("Lincoln High")
            .with_room("102")
            .with_cabinet("B")
            .with_shelf("3")
            .with_purchase_date("2021-05-01")
            .with_expiration_date("2026-05-01")
            .with_quantity("Good"),
        ChemicalRecord::new("2", "Benzene")
            .with_cas("71432")
            .with_status(Status::Low)
            .with_school("Washington Middle")
            .with_room("14")
            .with_purchase_date("2019-01-01")
            .with_expiration_date("2024-01-01")
            .with_quantity("Low"),
        ChemicalRecord::new("3", "Sodium Chloride")
            .with_cas("7647145")
            .with_status(Status::Fair)
            .with_school("Lincoln High")
            .with_purchase_date("2025-02-10")
            .with_expiration_date("2031-02-10")
            .with_quantity("Fair"),
        ChemicalRecord::new("4", "Ethanol")
            .with_cas("64175")
            .with_status(Status::OffSite)
            .with_purchase_date("not-a-date")
            .with_expiration_date("2027-09-01"),
        ChemicalRecord::new("5", "Methanol").with_cas("67561"),
    ]
}

/// Ids of a view, in order, for compact assertions.
pub fn ids(view: &[&ChemicalRecord]) -> Vec<&str> {
    view.iter().map(|record| record.id.as_str()).collect()
}
