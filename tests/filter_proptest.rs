// Property-based tests for the filter pipeline

use faqdash::catalog::{
    ALL_CATEGORY, Accent, CardSize, FaqRecord, RELATED_CAP, filter, related_for,
};
use proptest::prelude::*;

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Finance".to_string()),
        Just("Admission".to_string()),
        Just("Location".to_string()),
        Just("Student Life".to_string()),
        Just("Curriculum".to_string()),
    ]
}

fn arb_records() -> impl Strategy<Value = Vec<FaqRecord>> {
    prop::collection::vec(
        ("[a-z ?]{0,20}", "[a-z .]{0,40}", arb_category()),
        0..20,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (question, answer, category))| FaqRecord {
                id: i as u32 + 1,
                question,
                answer,
                size: CardSize::Medium,
                category,
                icon: "📄".to_string(),
                accent: Accent::Blue,
            })
            .collect()
    })
}

fn ids(records: &[&FaqRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

/// True when `needle` appears in `haystack` in order (not necessarily
/// contiguously).
fn is_subsequence(needle: &[u32], haystack: &[u32]) -> bool {
    let mut it = haystack.iter();
    needle.iter().all(|n| it.any(|h| h == n))
}

proptest! {
    #[test]
    fn filter_preserves_dataset_order(records in arb_records(), query in "[a-z ]{0,6}") {
        let all_ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        let result = filter(&records, ALL_CATEGORY, &query);
        prop_assert!(is_subsequence(&ids(&result), &all_ids));
    }

    #[test]
    fn filter_is_idempotent(records in arb_records(), category in arb_category(), query in "[a-z ]{0,6}") {
        let first = filter(&records, &category, &query);
        let again = filter(&records, &category, &query);
        prop_assert_eq!(ids(&first), ids(&again));
    }

    #[test]
    fn no_filters_means_no_exclusions(records in arb_records()) {
        let result = filter(&records, ALL_CATEGORY, "");
        prop_assert_eq!(result.len(), records.len());
    }

    #[test]
    fn conjunction_never_widens(records in arb_records(), category in arb_category(), query in "[a-z ]{0,6}") {
        let both = filter(&records, &category, &query);
        let category_only = filter(&records, &category, "");
        let query_only = filter(&records, ALL_CATEGORY, &query);

        prop_assert!(is_subsequence(&ids(&both), &ids(&category_only)));
        prop_assert!(is_subsequence(&ids(&both), &ids(&query_only)));
    }

    #[test]
    fn query_case_does_not_matter(records in arb_records(), query in "[a-z ]{0,6}") {
        let lower = filter(&records, ALL_CATEGORY, &query);
        let upper = filter(&records, ALL_CATEGORY, &query.to_uppercase());
        prop_assert_eq!(ids(&lower), ids(&upper));
    }

    #[test]
    fn related_is_capped_and_never_self(records in arb_records()) {
        for record in &records {
            let related = related_for(&records, record);
            prop_assert!(related.len() <= RELATED_CAP);
            prop_assert!(related.iter().all(|r| r.id != record.id));
            prop_assert!(related
                .iter()
                .all(|r| r.category.eq_ignore_ascii_case(&record.category)));
        }
    }
}
