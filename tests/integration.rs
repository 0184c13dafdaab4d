// Integration tests for faqdash
// This file serves as the main entry point for integration tests

mod common;

// Include all integration test modules
#[path = "integration/filtering.rs"]
mod filtering;

#[path = "integration/categories.rs"]
mod categories;

#[path = "integration/answer_format.rs"]
mod answer_format;

#[path = "integration/view_state.rs"]
mod view_state;

#[path = "integration/catalog_file.rs"]
mod catalog_file;
