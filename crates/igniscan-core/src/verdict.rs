//! Verdict extraction from the backend's free-text response.

use crate::model::{Assessment, InspectionVerdict};
use crate::profile::SeverityProfile;

/// Parses backend text into a structured verdict.
///
/// Overall assessment is a substring-presence heuristic: PASS iff the
/// literal token "PASS" occurs anywhere in the text, otherwise FAIL (so an
/// empty or ambiguous narrative degrades to FAIL, never to an error).
///
/// Known sharp edge, preserved deliberately: a failing narrative that quotes
/// the word PASS (e.g. "this would normally PASS but fails overall") is
/// misclassified. Do not strengthen the tie-break without a compatibility
/// decision; downstream consumers depend on the current behavior.
pub fn extract(text: &str, profile: &SeverityProfile) -> InspectionVerdict {
    let overall = if text.contains("PASS") {
        Assessment::Pass
    } else {
        Assessment::Fail
    };

    InspectionVerdict {
        narrative: text.to_string(),
        overall,
        per_criterion: extract_findings(text, profile),
    }
}

/// Matches each criterion label against the narrative, case-insensitively,
/// in order of first occurrence. A criterion's finding runs from its label
/// to the next matched label (or the end of the text). Criteria the
/// narrative never mentions get no entry.
fn extract_findings(text: &str, profile: &SeverityProfile) -> Vec<(String, String)> {
    let mut matches: Vec<(usize, &str)> = profile
        .criteria
        .iter()
        .filter_map(|c| find_ignore_ascii_case(text, &c.label).map(|pos| (pos, c.label.as_str())))
        .collect();
    matches.sort_by_key(|(pos, _)| *pos);

    let mut findings = Vec::with_capacity(matches.len());
    for (i, (start, label)) in matches.iter().enumerate() {
        let end = matches
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(text.len());
        let section = text[*start..end].trim();
        if !section.is_empty() {
            findings.push((label.to_string(), section.to_string()));
        }
    }
    findings
}

/// Byte-offset of the first ASCII-case-insensitive occurrence of `needle`.
/// Labels are ASCII, so a match can only start on an ASCII byte and the
/// returned offset is always a char boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}
