// Pure filtering over the catalog. Both filters are conjunctive and the
// result preserves dataset order (stable filter, no re-sorting).

use super::RELATED_CAP;
use super::types::FaqRecord;

/// Synthetic category id matching every record.
pub const ALL_CATEGORY: &str = "all";

/// Compute the visible subset for (category, search text).
///
/// Category ids are lowercased category names; comparison is
/// case-insensitive. The query is trimmed and matched as a lowercase
/// substring of question, answer, or category. An empty result is an
/// ordinary outcome, not an error.
pub fn filter<'a>(
    records: &'a [FaqRecord],
    active_category: &str,
    query: &str,
) -> Vec<&'a FaqRecord> {
    let needle = query.trim().to_lowercase();
    let category = active_category.to_lowercase();

    records
        .iter()
        .filter(|r| category == ALL_CATEGORY || r.category.to_lowercase() == category)
        .filter(|r| needle.is_empty() || matches_query(r, &needle))
        .collect()
}

fn matches_query(record: &FaqRecord, needle: &str) -> bool {
    record.question.to_lowercase().contains(needle)
        || record.answer.to_lowercase().contains(needle)
        || record.category.to_lowercase().contains(needle)
}

/// Records sharing `record`'s category, excluding itself, in dataset
/// order, capped at [`RELATED_CAP`].
pub fn related_for<'a>(records: &'a [FaqRecord], record: &FaqRecord) -> Vec<&'a FaqRecord> {
    records
        .iter()
        .filter(|r| r.id != record.id && r.category.eq_ignore_ascii_case(&record.category))
        .take(RELATED_CAP)
        .collect()
}
