// Integration tests for category derivation on synthetic datasets.
// The built-in dataset expectations live next to the derivation code;
// these exercise shapes the shipped data never produces.

use faqdash::catalog::derive_categories;

use crate::common::helpers::*;

#[test]
fn derivation_order_follows_first_occurrence() {
    // Two categories interleaved; first occurrence decides the order
    let records = vec![
        record(1, "a", "x", "Visas"),
        record(2, "b", "x", "Housing"),
        record(3, "c", "x", "Visas"),
        record(4, "d", "x", "Housing"),
    ];
    let categories = derive_categories(&records);
    let names: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(names, vec!["all", "visas", "housing"]);
}

#[test]
fn mixed_case_duplicates_collapse_to_one_entry() {
    let records = vec![
        record(1, "a", "x", "Visas"),
        record(2, "b", "x", "VISAS"),
        record(3, "c", "x", "visas"),
    ];
    let categories = derive_categories(&records);
    assert_eq!(categories.len(), 2);
    // Display name keeps the casing of the first occurrence
    assert_eq!(categories[1].name, "Visas");
}

#[test]
fn unknown_category_falls_back_to_generic_icon() {
    let records = vec![record(1, "a", "x", "Parking")];
    let categories = derive_categories(&records);
    assert_eq!(categories[1].icon, "📄");
}
