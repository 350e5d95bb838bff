//! Title / filename normalization — derives a filesystem-safe filename stem
//! and a display title from an explicit target role or, failing that, from
//! the job description text. Deterministic and total: absence of a usable
//! input always resolves to the fallback stem.

use once_cell::sync::Lazy;
use regex::Regex;

/// Filename stem used when nothing can be extracted from the inputs.
pub const FALLBACK_STEM: &str = "Updated_CV";

/// Captures a role phrase following "for", "as", "position:" or "role:".
/// The phrase is 3–60 characters of letters, spaces, ampersands, slashes,
/// and hyphens.
static ROLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\b(?:for|as)\b|position:|role:)\s+([A-Za-z][A-Za-z &/-]{2,59})")
        .expect("valid role regex")
});

/// A normalized document title: `stem` goes into the filename, `display`
/// (underscores restored to spaces) goes inside the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTitle {
    pub stem: String,
    pub display: String,
}

impl DocumentTitle {
    fn from_phrase(phrase: &str) -> Self {
        let stem = to_stem(phrase);
        let display = stem.replace('_', " ");
        DocumentTitle { stem, display }
    }

    fn fallback() -> Self {
        DocumentTitle {
            stem: FALLBACK_STEM.to_string(),
            display: FALLBACK_STEM.replace('_', " "),
        }
    }
}

/// Resolves the document title: explicit target first, then best-effort
/// extraction from the JD, then the fixed fallback.
pub fn resolve_title(target: Option<&str>, jd_text: &str) -> DocumentTitle {
    if let Some(target) = target {
        let target = target.trim();
        if !target.is_empty() {
            return DocumentTitle::from_phrase(target);
        }
    }
    match ROLE_PATTERN.captures(jd_text) {
        Some(caps) => DocumentTitle::from_phrase(caps[1].trim()),
        None => DocumentTitle::fallback(),
    }
}

/// trim → title-case → whitespace and slashes to underscores.
fn to_stem(phrase: &str) -> String {
    let cased = title_case(&phrase.trim().replace('/', " "));
    cased.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Uppercases the first letter of each whitespace-separated word and
/// lowercases the rest.
fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_target_is_normalized() {
        let title = resolve_title(Some("  senior backend engineer "), "irrelevant");
        assert_eq!(title.stem, "Senior_Backend_Engineer");
        assert_eq!(title.display, "Senior Backend Engineer");
    }

    #[test]
    fn test_explicit_target_wins_over_jd() {
        let title = resolve_title(Some("Data Engineer"), "Hiring for Platform Engineer");
        assert_eq!(title.stem, "Data_Engineer");
    }

    #[test]
    fn test_blank_target_falls_through_to_jd() {
        let title = resolve_title(Some("   "), "Hiring for Senior Backend Engineer");
        assert_eq!(title.stem, "Senior_Backend_Engineer");
    }

    #[test]
    fn test_extracts_role_after_for() {
        let title = resolve_title(None, "Hiring for Senior Backend Engineer");
        assert_eq!(title.stem, "Senior_Backend_Engineer");
        assert_eq!(title.display, "Senior Backend Engineer");
    }

    #[test]
    fn test_extracts_role_after_position_colon() {
        let title = resolve_title(None, "Position: staff software engineer\nRemote.");
        assert_eq!(title.stem, "Staff_Software_Engineer");
    }

    #[test]
    fn test_slashes_become_underscores() {
        let title = resolve_title(None, "We are hiring for DevOps/SRE Specialist");
        assert_eq!(title.stem, "Devops_Sre_Specialist");
    }

    #[test]
    fn test_no_match_yields_fallback() {
        let title = resolve_title(None, "An unusual posting with no trigger words.");
        assert_eq!(title.stem, FALLBACK_STEM);
        assert_eq!(title.display, "Updated CV");
    }

    #[test]
    fn test_for_inside_word_does_not_trigger() {
        // "effort" and "Transformers" must not satisfy the for/as keywords.
        let title = resolve_title(None, "Reward effort. Transformers knowledge welcome.");
        assert_eq!(title.stem, FALLBACK_STEM);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let jd = "Hiring for Senior Backend Engineer";
        assert_eq!(resolve_title(None, jd), resolve_title(None, jd));
        assert_eq!(
            resolve_title(Some("QA Lead"), jd),
            resolve_title(Some("QA Lead"), jd)
        );
    }
}
