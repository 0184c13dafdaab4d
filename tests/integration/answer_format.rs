// Integration tests for answer formatting against the shipped dataset.
// The formatter decides whether an answer renders as numbered steps or
// as prose; these pin that decision for the real kiosk content.

use faqdash::catalog::{FormattedAnswer, builtin_catalog, format_answer};

#[test]
fn application_answer_formats_as_five_steps() {
    let catalog = builtin_catalog();
    let apply = catalog.find(8).unwrap();

    match format_answer(&apply.answer) {
        FormattedAnswer::Steps(steps) => {
            assert_eq!(steps.len(), 5);
            assert_eq!(steps[0], "Check your eligibility on our website.");
            assert!(steps[4].starts_with("Prepare your portfolio"));
        }
        FormattedAnswer::Paragraphs(_) => panic!("numbered procedure rendered as prose"),
    }
}

#[test]
fn prose_answers_format_as_paragraphs() {
    let catalog = builtin_catalog();
    let location = catalog.find(2).unwrap();

    match format_answer(&location.answer) {
        FormattedAnswer::Paragraphs(paragraphs) => {
            assert!(!paragraphs.is_empty());
            assert!(paragraphs[0].contains("Taylor Square"));
        }
        FormattedAnswer::Steps(_) => panic!("prose rendered as steps"),
    }
}

#[test]
fn currency_and_percentages_stay_prose() {
    // "$16,246", "20%", and "2025" all contain digits but none are step
    // markers; the fees and FEE-HELP answers must stay paragraphs
    let catalog = builtin_catalog();
    for id in [1, 11] {
        let record = catalog.find(id).unwrap();
        assert!(matches!(
            format_answer(&record.answer),
            FormattedAnswer::Paragraphs(_)
        ));
    }
}

#[test]
fn every_answer_in_the_dataset_formats_to_something() {
    // No answer may fall through to an empty body
    let catalog = builtin_catalog();
    for record in &catalog.records {
        match format_answer(&record.answer) {
            FormattedAnswer::Steps(steps) => assert!(!steps.is_empty(), "id {}", record.id),
            FormattedAnswer::Paragraphs(paragraphs) => {
                assert!(!paragraphs.is_empty(), "id {}", record.id)
            }
        }
    }
}
