//! The query engine entry point.

use chemtrack_inventory::ChemicalRecord;

use crate::criteria::QueryCriteria;
use crate::search;

/// Produces the ordered view of `records` selected by `criteria`.
///
/// Pure and synchronous: records are borrowed, never cloned or mutated,
/// and the result is a fresh vector of references in display order. Empty
/// input or no matches yield an empty vector, never an error, so the
/// caller can re-run this on every keystroke and filter toggle.
///
/// The filter categories (search, status, quantity, purchase date,
/// expiration date) are combined with logical AND; membership within one
/// set is OR.
pub fn select<'a>(
    records: &'a [ChemicalRecord],
    criteria: &QueryCriteria,
) -> Vec<&'a ChemicalRecord> {
    let term = search::normalize(&criteria.search_text);

    let mut selected: Vec<&ChemicalRecord> = records
        .iter()
        .filter(|record| {
            search::matches(record, &term, criteria.include_school_in_search)
                && matches_status(record, criteria)
                && matches_quantity(record, criteria)
                && matches_purchase_bucket(record, criteria)
                && matches_expiration_bucket(record, criteria)
        })
        .collect();

    // Stable sort: records comparing equal keep their input order.
    selected.sort_by(|a, b| criteria.sort_key.compare(a, b));

    tracing::trace!(
        total = records.len(),
        selected = selected.len(),
        sort = %criteria.sort_key,
        "chemical query evaluated"
    );

    selected
}

/// Status filter: exact, case-sensitive membership. A record with no
/// status fails any active status filter.
fn matches_status(record: &ChemicalRecord, criteria: &QueryCriteria) -> bool {
    if criteria.status_filter.is_empty() {
        return true;
    }
    record
        .status
        .as_ref()
        .is_some_and(|status| criteria.status_filter.contains(status))
}

/// Quantity filter: the free-text quantity must classify as one of the
/// selected levels. A record with no quantity, or with text outside the
/// vocabulary, fails any active quantity filter.
fn matches_quantity(record: &ChemicalRecord, criteria: &QueryCriteria) -> bool {
    if criteria.quantity_filter.is_empty() {
        return true;
    }
    record.quantity.as_deref().is_some_and(|quantity| {
        criteria
            .quantity_filter
            .iter()
            .any(|level| level.matches(quantity))
    })
}

/// Purchase date filter. Missing and unparsable dates both fail an active
/// filter; a parsed date passes if any selected bucket contains it.
fn matches_purchase_bucket(record: &ChemicalRecord, criteria: &QueryCriteria) -> bool {
    if criteria.purchase_date_filter.is_empty() {
        return true;
    }
    record.purchased_on().is_some_and(|date| {
        criteria
            .purchase_date_filter
            .iter()
            .any(|bucket| bucket.contains(date))
    })
}

/// Expiration date filter, same rules as the purchase date filter.
fn matches_expiration_bucket(record: &ChemicalRecord, criteria: &QueryCriteria) -> bool {
    if criteria.expiration_date_filter.is_empty() {
        return true;
    }
    record.expires_on().is_some_and(|date| {
        criteria
            .expiration_date_filter
            .iter()
            .any(|bucket| bucket.contains(date))
    })
}
