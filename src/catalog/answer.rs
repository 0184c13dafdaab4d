// Answer formatting. Answers that read "1. ... 2. ..." are procedures
// and render as discrete steps; everything else renders as paragraphs.

/// A display-ready answer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedAnswer {
    /// Ordered procedure. Leading "N. " markers are stripped; the
    /// renderer supplies 1-based step badges.
    Steps(Vec<String>),
    /// Prose split on line boundaries.
    Paragraphs(Vec<String>),
}

/// Format an answer for the detail view.
///
/// If the text contains the literal "1." it is treated as a numbered
/// procedure and split on "<digits>. " markers. A malformed procedure
/// (no usable steps) falls back to a single raw paragraph.
pub fn format_answer(answer: &str) -> FormattedAnswer {
    if answer.contains("1.") {
        let steps = split_steps(answer);
        if steps.is_empty() {
            return FormattedAnswer::Paragraphs(vec![answer.to_string()]);
        }
        return FormattedAnswer::Steps(steps);
    }

    let paragraphs: Vec<String> = answer
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if paragraphs.is_empty() {
        FormattedAnswer::Paragraphs(vec![answer.to_string()])
    } else {
        FormattedAnswer::Paragraphs(paragraphs)
    }
}

/// Split on "<digits>. " markers, returning the trimmed text after each
/// marker. Text before the first marker is preamble and is dropped, as
/// in the original kiosk display.
fn split_steps(answer: &str) -> Vec<String> {
    let bytes = answer.as_bytes();
    let mut starts: Vec<usize> = Vec::new(); // content offset after each marker
    let mut marker_starts: Vec<usize> = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1] == b' ' {
                marker_starts.push(start);
                starts.push(i + 2);
                i += 2;
                continue;
            }
        } else {
            i += 1;
        }
    }

    let mut steps = Vec::with_capacity(starts.len());
    for (n, &content_start) in starts.iter().enumerate() {
        let end = marker_starts.get(n + 1).copied().unwrap_or(answer.len());
        let step = answer[content_start..end].trim();
        if !step.is_empty() {
            steps.push(step.to_string());
        }
    }
    steps
}
