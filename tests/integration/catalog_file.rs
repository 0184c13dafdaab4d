// Integration tests for loading a catalog from a TOML file

use faqdash::catalog::Catalog;
use std::fs;
use tempfile::TempDir;

fn write_catalog(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.toml");
    fs::write(&path, contents).expect("write catalog file");
    path
}

#[test]
fn loads_a_valid_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        r#"
[[faq]]
id = 1
question = "When does term start?"
answer = "Term starts in February."
category = "Enrolment"
icon = "📅"

[[faq]]
id = 2
question = "Where do I collect my student card?"
answer = "1. Visit the front office. 2. Bring photo ID."
size = "large"
category = "Enrolment"
icon = "🪪"
accent = "teal"
"#,
    );

    let catalog = Catalog::load(&path).expect("catalog should load");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find(2).unwrap().category, "Enrolment");
}

#[test]
fn empty_file_is_an_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "");
    let catalog = Catalog::load(&path).expect("empty catalog is valid");
    assert!(catalog.is_empty());
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        r#"
[[faq]]
id = 7
question = "a"
answer = "x"
category = "General"
icon = "📄"

[[faq]]
id = 7
question = "b"
answer = "y"
category = "General"
icon = "📄"
"#,
    );

    let err = Catalog::load(&path).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn blank_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        r#"
[[faq]]
id = 1
question = "a"
answer = "x"
category = "  "
icon = "📄"
"#,
    );

    assert!(Catalog::load(&path).is_err());
}

#[test]
fn missing_file_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Catalog::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
}
