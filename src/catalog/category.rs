// Category derivation. A pure function of the dataset; the synthetic
// "all" entry is always first.

use super::filter::ALL_CATEGORY;
use super::types::FaqRecord;

/// A grouping label on FAQ records, plus the synthetic "all" group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Lowercased category name, or "all".
    pub id: String,
    /// Display name, case-sensitive as stored in the dataset.
    pub name: String,
    pub icon: &'static str,
}

/// Fixed icon table keyed by lowercased category name. Unrecognized
/// categories get the generic document icon.
pub fn icon_for(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "finance" => "💰",
        "admission" => "📝",
        "location" => "📍",
        "curriculum" => "🎨",
        "student life" => "🏠",
        "application" => "✏️",
        _ => "📄",
    }
}

/// Distinct categories in first-occurrence order, prefixed by "all".
pub fn derive_categories(records: &[FaqRecord]) -> Vec<Category> {
    let mut categories = vec![Category {
        id: ALL_CATEGORY.to_string(),
        name: "All".to_string(),
        icon: "🎓",
    }];

    for record in records {
        let id = record.category.to_lowercase();
        if categories.iter().any(|c| c.id == id) {
            continue;
        }
        categories.push(Category {
            icon: icon_for(&record.category),
            id,
            name: record.category.clone(),
        });
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn all_is_first_and_count_is_distinct_plus_one() {
        let catalog = builtin_catalog();
        let categories = derive_categories(&catalog.records);

        assert_eq!(categories[0].id, "all");
        assert_eq!(categories[0].icon, "🎓");
        // 6 distinct categories in the built-in dataset
        assert_eq!(categories.len(), 7);
    }

    #[test]
    fn first_occurrence_order_is_preserved() {
        let catalog = builtin_catalog();
        let categories = derive_categories(&catalog.records);
        let ids: Vec<&str> = categories
            .iter()
            .map(|c| c.id.as_str())
            .collect::<Vec<_>>()
            .into_iter()
            .collect();
        assert_eq!(
            ids,
            vec![
                "all",
                "finance",
                "location",
                "student life",
                "admission",
                "curriculum",
                "application"
            ]
        );
    }

    #[test]
    fn derivation_is_stable_across_calls() {
        let catalog = builtin_catalog();
        let first = derive_categories(&catalog.records);
        let second = derive_categories(&catalog.records);
        assert_eq!(first, second);
    }

    #[test]
    fn icon_table_has_a_default() {
        assert_eq!(icon_for("Finance"), "💰");
        assert_eq!(icon_for("STUDENT LIFE"), "🏠");
        assert_eq!(icon_for("Parking"), "📄");
    }

    #[test]
    fn empty_dataset_still_has_all() {
        let categories = derive_categories(&[]);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "all");
    }
}
