//! End-to-end tests for the chemical list query engine.
//!
//! These drive [`chemtrack_query::select`] the way the list screen does:
//! one immutable record collection, criteria varied per interaction.

mod common;

use chemtrack_inventory::{ChemicalRecord, Status};
use chemtrack_query::{
    ExpirationBucket, PurchaseBucket, QuantityLevel, QueryCriteria, SortKey, select,
};

use common::{acetone_and_benzene, ids, stockroom};

// ============================================================================
// Filtering
// ============================================================================

/// With no search term and no filters, filtering passes every record
/// through; a sort key under which all records compare equal shows the
/// input order surviving untouched.
#[test]
fn test_unfiltered_query_keeps_every_record_in_input_order() {
    let records = vec![
        ChemicalRecord::new("1", "Zinc"),
        ChemicalRecord::new("2", "Acetone"),
        ChemicalRecord::new("3", "Benzene"),
    ];

    // None of these records has a status, so they all tie under the
    // status ordering and the stable sort preserves input order.
    let criteria = QueryCriteria::new().with_sort(SortKey::StatusLowToHigh);
    let view = select(&records, &criteria);

    assert_eq!(ids(&view), vec!["1", "2", "3"]);
}

#[test]
fn test_search_by_name_substring_finds_the_record() {
    let records = stockroom();
    let view = select(&records, &QueryCriteria::new().with_search("chloride"));
    assert_eq!(ids(&view), vec!["3"]);
}

#[test]
fn test_search_matches_cas_with_dashes_in_the_term() {
    let records = stockroom();
    let view = select(&records, &QueryCriteria::new().with_search("67-64-1"));
    assert_eq!(ids(&view), vec!["1"]);
}

#[test]
fn test_search_matches_concatenated_location() {
    let records = stockroom();
    let view = select(&records, &QueryCriteria::new().with_search("102b3"));
    assert_eq!(ids(&view), vec!["1"]);
}

#[test]
fn test_school_search_only_for_privileged_callers() {
    let records = stockroom();

    let unprivileged = QueryCriteria::new().with_search("lincoln");
    assert!(select(&records, &unprivileged).is_empty());

    let privileged = QueryCriteria::new()
        .with_search("lincoln")
        .with_school_search();
    assert_eq!(ids(&select(&records, &privileged)), vec!["1", "3"]);
}

#[test]
fn test_status_filter_returns_only_matching_records() {
    let records = stockroom();
    let view = select(&records, &QueryCriteria::new().with_status(Status::Low));
    assert_eq!(ids(&view), vec!["2"]);
}

#[test]
fn test_status_filter_is_exact_and_case_sensitive() {
    let records = vec![
        ChemicalRecord::new("1", "Acetone").with_status(Status::Low),
        ChemicalRecord::new("2", "Benzene").with_status(Status::Other("low".to_string())),
    ];
    let view = select(&records, &QueryCriteria::new().with_status(Status::Low));
    assert_eq!(ids(&view), vec!["1"]);
}

#[test]
fn test_quantity_filter_matches_the_vocabulary_case_insensitively() {
    let records = stockroom();

    let low_or_fair = QueryCriteria::new()
        .with_quantity_level(QuantityLevel::Low)
        .with_quantity_level(QuantityLevel::Fair);
    assert_eq!(ids(&select(&records, &low_or_fair)), vec!["2", "3"]);

    // Records with no quantity, or free text outside the vocabulary,
    // fail any active quantity filter.
    let good = QueryCriteria::new().with_quantity_level(QuantityLevel::Good);
    assert_eq!(ids(&select(&records, &good)), vec!["1"]);
}

#[test]
fn test_invalid_purchase_date_fails_an_active_bucket_filter() {
    let records = stockroom();

    // Record 4 has purchase_date "not-a-date": present without a bucket
    // filter, excluded under any bucket selection.
    let unfiltered = select(&records, &QueryCriteria::new());
    assert!(unfiltered.iter().any(|record| record.id == "4"));

    let criteria = QueryCriteria::new()
        .with_purchase_bucket(PurchaseBucket::Before2020)
        .with_purchase_bucket(PurchaseBucket::From2020To2024)
        .with_purchase_bucket(PurchaseBucket::After2024);

    let filtered = select(&records, &criteria);
    assert!(filtered.iter().all(|record| record.id != "4"));
    // Record 5 has no purchase date at all and is excluded the same way.
    assert!(filtered.iter().all(|record| record.id != "5"));
}

#[test]
fn test_purchase_bucket_selects_by_year_range() {
    let records = stockroom();
    let view = select(
        &records,
        &QueryCriteria::new().with_purchase_bucket(PurchaseBucket::From2020To2024),
    );
    assert_eq!(ids(&view), vec!["1"]);
}

#[test]
fn test_expiration_buckets_are_ored_within_the_set() {
    let records = stockroom();
    let criteria = QueryCriteria::new()
        .with_expiration_bucket(ExpirationBucket::Before2025)
        .with_expiration_bucket(ExpirationBucket::After2030);
    let view = select(&records, &criteria);
    assert_eq!(ids(&view), vec!["2", "3"]);
}

#[test]
fn test_all_filter_categories_combine_with_and() {
    let records = stockroom();
    let criteria = QueryCriteria::new()
        .with_search("acetone")
        .with_status(Status::Good)
        .with_purchase_bucket(PurchaseBucket::From2020To2024)
        .with_expiration_bucket(ExpirationBucket::From2025To2030);
    assert_eq!(ids(&select(&records, &criteria)), vec!["1"]);

    // Flipping any single category breaks the match.
    let wrong_status = QueryCriteria::new()
        .with_search("acetone")
        .with_status(Status::Low);
    assert!(select(&records, &wrong_status).is_empty());
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_name_orders_reverse_each_other_for_distinct_names() {
    let records = stockroom();

    let forward = select(&records, &QueryCriteria::new().with_sort(SortKey::NameAToZ));
    let mut reversed = select(&records, &QueryCriteria::new().with_sort(SortKey::NameZToA));
    reversed.reverse();

    assert_eq!(ids(&forward), ids(&reversed));
}

#[test]
fn test_status_low_to_high_orders_low_fair_good() {
    let records = vec![
        ChemicalRecord::new("g", "Gamma").with_status(Status::Good),
        ChemicalRecord::new("l", "Lambda").with_status(Status::Low),
        ChemicalRecord::new("f", "Phi").with_status(Status::Fair),
    ];
    let view = select(
        &records,
        &QueryCriteria::new().with_sort(SortKey::StatusLowToHigh),
    );
    assert_eq!(ids(&view), vec!["l", "f", "g"]);
}

#[test]
fn test_status_high_to_low_puts_off_site_and_missing_last() {
    let records = vec![
        ChemicalRecord::new("o", "Omega").with_status(Status::OffSite),
        ChemicalRecord::new("l", "Lambda").with_status(Status::Low),
        ChemicalRecord::new("m", "Mu"),
        ChemicalRecord::new("g", "Gamma").with_status(Status::Good),
    ];
    let view = select(
        &records,
        &QueryCriteria::new().with_sort(SortKey::StatusHighToLow),
    );
    // Off-site, unknown, and missing all tie at the tail, keeping input
    // order among themselves.
    assert_eq!(ids(&view), vec!["g", "l", "o", "m"]);
}

#[test]
fn test_newest_first_and_oldest_first() {
    let records = stockroom();

    let newest = select(&records, &QueryCriteria::new().with_sort(SortKey::NewestFirst));
    assert_eq!(ids(&newest), vec!["3", "1", "2", "4", "5"]);

    let oldest = select(&records, &QueryCriteria::new().with_sort(SortKey::OldestFirst));
    assert_eq!(ids(&oldest), vec!["2", "1", "3", "4", "5"]);
}

#[test]
fn test_by_expiration_sorts_soonest_first_with_undated_last() {
    let records = stockroom();
    let view = select(&records, &QueryCriteria::new().with_sort(SortKey::ByExpiration));
    assert_eq!(ids(&view), vec!["2", "1", "4", "3", "5"]);
}

#[test]
fn test_lowest_quantity_first_uses_the_stock_vocabulary() {
    let records = stockroom();
    let view = select(
        &records,
        &QueryCriteria::new().with_sort(SortKey::LowestQuantityFirst),
    );
    // Low, Fair, Good, then the records with no usable quantity.
    assert_eq!(ids(&view), vec!["2", "3", "1", "4", "5"]);
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn test_search_acet_selects_only_acetone() {
    let records = acetone_and_benzene();
    let view = select(&records, &QueryCriteria::new().with_search("acet"));
    assert_eq!(ids(&view), vec!["1"]);
}

#[test]
fn test_oldest_first_puts_benzene_before_acetone() {
    let records = acetone_and_benzene();
    let view = select(&records, &QueryCriteria::new().with_sort(SortKey::OldestFirst));
    assert_eq!(ids(&view), vec!["2", "1"]);
}
