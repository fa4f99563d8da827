//! Free-text search matching.

use chemtrack_inventory::ChemicalRecord;

/// Reduces text to its lowercase alphanumeric characters.
///
/// Both the search term and every candidate field go through this, so
/// `"67-64-1"` finds a record whose CAS is stored as `"67641"`, and
/// punctuation or spacing differences never hide a match.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns true if any searchable field of `record` contains
/// `normalized_term`.
///
/// The term must already be normalized with [`normalize`]; the engine does
/// this once per query rather than once per record. Candidate fields are
/// the name, the CAS number, the school (only for callers allowed to
/// search across schools), and the combined room/cabinet/shelf location.
/// Absent fields are skipped. An empty term matches every record.
pub fn matches(record: &ChemicalRecord, normalized_term: &str, include_school: bool) -> bool {
    if normalized_term.is_empty() {
        return true;
    }

    if normalize(&record.name).contains(normalized_term) {
        return true;
    }

    if let Some(cas) = record.cas.as_deref() {
        if normalize(cas).contains(normalized_term) {
            return true;
        }
    }

    if include_school {
        if let Some(school) = record.school.as_deref() {
            if normalize(school).contains(normalized_term) {
                return true;
            }
        }
    }

    record
        .location()
        .is_some_and(|location| normalize(&location).contains(normalized_term))
}
