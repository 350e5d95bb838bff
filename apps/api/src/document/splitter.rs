//! Section Splitter — partitions rewritten résumé text into (heading, body) pairs.
//!
//! The splitter never fails: text with no recognized heading degrades to a
//! single unlabeled section. Nothing is dropped or merged — concatenating the
//! heading lines and bodies in order reconstructs the input up to whitespace.

use crate::document::{match_label, Section};

/// Splits `raw_text` into ordered sections using `labels` as the heading set.
///
/// Each heading line starts a new section; text before the first heading
/// becomes an unlabeled section (omitted only when blank). A label appearing
/// twice yields two sections in encountered order. Headings and bodies are
/// trimmed; blank lines inside a body are kept as paragraph breaks.
pub fn split(raw_text: &str, labels: &[&str]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut heading: Option<String> = None;
    let mut body_lines: Vec<&str> = Vec::new();

    for line in raw_text.lines() {
        if let Some(label) = match_label(line, labels) {
            flush(&mut sections, heading.take(), &body_lines);
            heading = Some(label.to_string());
            body_lines.clear();
        } else {
            body_lines.push(line);
        }
    }
    flush(&mut sections, heading, &body_lines);

    sections
}

/// Closes out the current section. An unlabeled section with a blank body is
/// not emitted; a labeled section always is (empty bodies are legal).
fn flush(sections: &mut Vec<Section>, heading: Option<String>, body_lines: &[&str]) {
    let body = body_lines.join("\n").trim().to_string();
    if heading.is_none() && body.is_empty() {
        return;
    }
    sections.push(Section { heading, body });
}
