#![allow(dead_code)] // Spare tools for the next regression meteor shower

use faqdash::catalog::{Accent, CardSize, Catalog, FaqRecord};

/// Build a minimal record for synthetic-dataset tests.
pub fn record(id: u32, question: &str, answer: &str, category: &str) -> FaqRecord {
    FaqRecord {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
        size: CardSize::Medium,
        category: category.to_string(),
        icon: "📄".to_string(),
        accent: Accent::Blue,
    }
}

/// Wrap records into a catalog without going through TOML.
pub fn catalog_from(records: Vec<FaqRecord>) -> Catalog {
    Catalog { records }
}

/// Collapse a filter result down to ids for compact assertions.
pub fn ids(records: &[&FaqRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}
