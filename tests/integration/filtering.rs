// Integration tests for catalog filtering
//
// These run the filter pipeline over the compiled-in dataset, the same
// data the kiosk ships with, so the expectations below are pinned to
// actual content. Algorithm-level cases live next to the filter code.

use faqdash::catalog::{ALL_CATEGORY, builtin_catalog, filter, related_for};

use crate::common::helpers::*;

#[test]
fn full_grid_preserves_dataset_order() {
    let catalog = builtin_catalog();
    let result = filter(&catalog.records, ALL_CATEGORY, "");
    assert_eq!(ids(&result), (1..=12).collect::<Vec<u32>>());
}

#[test]
fn category_id_matching_ignores_case() {
    let catalog = builtin_catalog();
    let lower = filter(&catalog.records, "finance", "");
    let upper = filter(&catalog.records, "FINANCE", "");
    assert_eq!(ids(&lower), ids(&upper));
    assert_eq!(ids(&lower), vec![1, 11, 12]);
}

#[test]
fn query_reaches_question_answer_and_category_text() {
    let catalog = builtin_catalog();

    // Question text
    assert_eq!(ids(&filter(&catalog.records, ALL_CATEGORY, "defer")), vec![10]);

    // Answer text only
    assert_eq!(
        ids(&filter(&catalog.records, ALL_CATEGORY, "Taylor Square")),
        vec![2]
    );

    // Category text
    assert_eq!(
        ids(&filter(&catalog.records, ALL_CATEGORY, "curriculum")),
        vec![6]
    );
}

#[test]
fn query_case_does_not_change_the_result() {
    let catalog = builtin_catalog();
    let lower = filter(&catalog.records, ALL_CATEGORY, "atar");
    let mixed = filter(&catalog.records, ALL_CATEGORY, "AtAr");
    assert_eq!(ids(&lower), vec![7]);
    assert_eq!(ids(&lower), ids(&mixed));
}

#[test]
fn conjunction_outside_the_right_category_matches_nothing() {
    let catalog = builtin_catalog();
    // "FEE-HELP" exists in the dataset but only under finance
    let result = filter(&catalog.records, "admission", "FEE-HELP");
    assert!(result.is_empty());
}

#[test]
fn related_shares_category_and_excludes_self() {
    let catalog = builtin_catalog();
    let part_time = catalog.find(4).unwrap();
    let related = related_for(&catalog.records, part_time);
    assert_eq!(ids(&related), vec![5, 7, 10]);
    assert!(related.iter().all(|r| r.id != part_time.id));
}

#[test]
fn related_ignores_category_case() {
    let records = vec![
        record(1, "a", "x", "Visas"),
        record(2, "b", "x", "VISAS"),
        record(3, "c", "x", "visas"),
    ];
    let related = related_for(&records, &records[0]);
    assert_eq!(ids(&related), vec![2, 3]);
}
